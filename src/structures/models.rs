use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde::Deserialize;

/// The creation endpoint's reply, decoded into a tagged type instead of
/// probing a loose JSON value for an `erro` key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerReply {
    Created,
    Rejected { message: Option<String> },
}

/// Error body of a rejected submission. Anything that fails to decode
/// into this shape is treated as carrying no message.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub erro: Option<String>,
}

/// A local renderable reference for a picked image, in the shape of a
/// browser object URL. Minting a handle never fails; each mint yields a
/// distinct token, so replacing a selection is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    pub inner: String,
}

impl ObjectUrl {
    pub fn mint() -> Self {
        let token: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();

        Self {
            inner: "blob:".to_owned() + &token,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

/// What the preview area shows: the placeholder, or a handle to the
/// currently selected file. The previous handle is replaced, not
/// revoked, on every new selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImagePreview {
    Placeholder,
    Selected(ObjectUrl),
}

impl ImagePreview {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}
