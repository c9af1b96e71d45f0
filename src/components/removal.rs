/// Native confirmation prompt. The page uses `window.confirm`; tests
/// answer from a script.
pub trait ConfirmDialog {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Browser navigation. The removal itself happens server-side at the
/// target URL.
pub trait Navigator {
    fn goto(&mut self, url: &str);
}

/// Guard in front of a pet's removal link: asks for confirmation with
/// the pet's name, navigates only on consent.
#[derive(Clone, Debug)]
pub struct PetRemoval {
    pet_name: Option<String>,
    href: String,
}

impl PetRemoval {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            pet_name: None,
            href: href.into(),
        }
    }

    /// From the control's `data-pet-nome` attribute, when the markup
    /// carries one.
    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.pet_name = Some(name.into());
        self
    }

    /// Returns whether the removal went ahead.
    pub fn on_activate<C, N>(&self, dialog: &mut C, navigator: &mut N) -> bool
    where
        C: ConfirmDialog,
        N: Navigator,
    {
        let name = self.pet_name.as_deref().unwrap_or("este pet");
        let message = "Tem certeza que deseja remover permanentemente o pet: ".to_owned()
            + name
            + "? Esta ação não pode ser desfeita.";

        if dialog.confirm(&message) {
            navigator.goto(&self.href);

            true
        } else {
            false
        }
    }
}
