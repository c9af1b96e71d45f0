mod panels;
mod registration;
mod removal;
mod senha;

pub use panels::{LoginPanels, Panel};
pub use registration::{PetRegistrationForm, SubmitError};
pub use removal::{ConfirmDialog, Navigator, PetRemoval};
pub use senha::{check_passwords, PasswordFeedback};

/// Where user-visible messages go. The pages surface them as blocking
/// alerts; tests record them.
pub trait FeedbackSink {
    fn alert(&mut self, message: &str);
}
