use std::collections::BTreeMap;

use thiserror::Error;
use tracing::error;

use crate::cadpet;
use crate::components::FeedbackSink;
use crate::structures::forms::{PetCreation, PhotoFile};
use crate::structures::models::{ImagePreview, ObjectUrl, ServerReply};
use crate::ApiConfig;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// A second submission was attempted while one is still pending.
    #[error("já existe um cadastro em andamento")]
    InFlight,
    #[error("falha de comunicação com o servidor")]
    Network(#[from] reqwest::Error),
}

/// The pet registration form: text fields, an optional photo with its
/// local preview, and the submission flow against `/api/cadpet/`.
///
/// Field names are dynamic, matching whatever inputs the page declares;
/// [`PetCreation`] loads the standard registration page's set. At most
/// one submission is in flight at a time; a submission abandoned
/// mid-flight (its future dropped) keeps the form locked, since the
/// request may still be on the wire.
pub struct PetRegistrationForm<'a> {
    config: ApiConfig<'a>,
    fields: BTreeMap<String, String>,
    foto: Option<PhotoFile>,
    preview: ImagePreview,
    in_flight: bool,
}

impl<'a> PetRegistrationForm<'a> {
    pub fn new(config: ApiConfig<'a>) -> Self {
        Self {
            config,
            fields: BTreeMap::new(),
            foto: None,
            preview: ImagePreview::Placeholder,
            in_flight: false,
        }
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Loads the standard registration page's inputs in one go.
    pub fn load(&mut self, form: PetCreation) {
        self.fields.extend(form.into_fields());
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }

    pub fn photo(&self) -> Option<&PhotoFile> {
        self.foto.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The image picker changed: a fresh preview handle for the new
    /// file, or back to the placeholder when the selection was cleared.
    pub fn on_file_selected(&mut self, file: Option<PhotoFile>) {
        match file {
            Some(file) => {
                self.preview = ImagePreview::Selected(ObjectUrl::mint());
                self.foto = Some(file);
            }
            None => {
                self.preview = ImagePreview::Placeholder;
                self.foto = None;
            }
        }
    }

    /// Submits the current fields (and photo, if any) as one multipart
    /// POST, then drives the user-visible outcome:
    ///
    /// - created: success alert, all fields cleared, preview back to
    ///   the placeholder, photo selection dropped;
    /// - rejected: the server's `erro` message (or a generic fallback)
    ///   alerted, everything kept for correction and resubmission;
    /// - network failure: generic communication alert, everything
    ///   kept, no retry.
    pub async fn on_submit<F: FeedbackSink>(
        &mut self,
        feedback: &mut F,
    ) -> Result<ServerReply, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }

        self.in_flight = true;

        let sent = cadpet::submit(&self.config, &self.fields, self.foto.as_ref()).await;

        self.in_flight = false;

        match sent {
            Ok(ServerReply::Created) => {
                feedback.alert("Pet cadastrado com sucesso!");
                self.reset();

                Ok(ServerReply::Created)
            }
            Ok(ServerReply::Rejected { message }) => {
                let text = message.as_deref().unwrap_or("Erro desconhecido.");
                feedback.alert(&("Erro: ".to_owned() + text));

                Ok(ServerReply::Rejected { message })
            }
            Err(e) => {
                error!("Erro de rede: {e}");
                feedback.alert("Falha de comunicação com o servidor.");

                Err(SubmitError::Network(e))
            }
        }
    }

    // form.reset(): values go blank, the inputs themselves stay
    fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }

        self.foto = None;
        self.preview = ImagePreview::Placeholder;
    }
}
