/// Live feedback for the password-confirmation pair on the reset page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordFeedback {
    /// Confirmation field untouched; nothing to say yet.
    Empty,
    Match,
    NoMatch,
}

impl PasswordFeedback {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Match => "✓ As senhas coincidem",
            Self::NoMatch => "✗ As senhas não coincidem",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Empty => "senha-match",
            Self::Match => "senha-match match",
            Self::NoMatch => "senha-match no-match",
        }
    }
}

/// Recomputed on every keystroke in either field.
pub fn check_passwords(nova: &str, confirma: &str) -> PasswordFeedback {
    if confirma.is_empty() {
        PasswordFeedback::Empty
    } else if nova == confirma {
        PasswordFeedback::Match
    } else {
        PasswordFeedback::NoMatch
    }
}
