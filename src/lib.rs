//! Client-side form components for the Patas na Rua shelter platform.
//!
//! Each component mirrors one page script: the pet registration form
//! (image preview + multipart submission), the login/password-recovery
//! panel toggle, the live password-match feedback, and the removal
//! confirmation guard. Components take their collaborators (feedback
//! sink, confirm dialog, navigator) as arguments so they can be driven
//! in tests without a browser document.

pub mod cadpet;
pub mod components;
pub mod structures;

use std::borrow::Cow;

use lazy_static::lazy_static;
use reqwest::Client;

pub const CADPET_PATH: &str = "/api/cadpet/";
pub const FOTO_FIELD: &str = "foto";

lazy_static! {
    pub(crate) static ref HTTP_CLIENT: Client = Client::new();
}

/// Where the backend lives. Built from the environment in deployments,
/// directly in tests.
#[derive(Clone, Debug)]
pub struct ApiConfig<'a> {
    base_url: Cow<'a, str>,
}

impl<'a> ApiConfig<'a> {
    pub fn new(base_url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Result<ApiConfig<'static>, std::env::VarError> {
        dotenv::dotenv().ok();

        let base_url: Cow<str> = Cow::Owned(std::env::var("PATAS_API_URL")?);

        Ok(ApiConfig { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn cadpet_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_owned() + CADPET_PATH
    }
}
