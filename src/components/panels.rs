#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Login,
    PasswordRecovery,
}

/// The login page's two exclusive panels. Exactly one is visible;
/// the page starts on the login panel.
#[derive(Clone, Debug)]
pub struct LoginPanels {
    active: Panel,
}

impl LoginPanels {
    pub fn new() -> Self {
        Self {
            active: Panel::Login,
        }
    }

    /// "Esqueci minha senha" link.
    pub fn open_recovery(&mut self) {
        self.active = Panel::PasswordRecovery;
    }

    /// "Voltar ao login" link.
    pub fn back_to_login(&mut self) {
        self.active = Panel::Login;
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == panel
    }
}

impl Default for LoginPanels {
    fn default() -> Self {
        Self::new()
    }
}
