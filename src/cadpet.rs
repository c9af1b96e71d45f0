use std::collections::BTreeMap;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::structures::forms::PhotoFile;
use crate::structures::models::{ErrorBody, ServerReply};
use crate::{ApiConfig, FOTO_FIELD, HTTP_CLIENT};

/// Sends one registration to the creation endpoint.
///
/// Every text field becomes a part of the multipart body under its own
/// name; the photo, when present, travels as a single `foto` part. The
/// returned error covers network-level failures only — a non-success
/// HTTP status is a normal [`ServerReply::Rejected`].
pub async fn submit(
    config: &ApiConfig<'_>,
    fields: &BTreeMap<String, String>,
    foto: Option<&PhotoFile>,
) -> Result<ServerReply, reqwest::Error> {
    let mut form = Form::new();

    for (name, value) in fields {
        form = form.text(name.clone(), value.clone());
    }

    if let Some(foto) = foto {
        let part = Part::bytes(foto.bytes.clone())
            .file_name(foto.file_name.clone())
            .mime_str(&foto.mime_type)?;

        form = form.part(FOTO_FIELD, part);
    }

    let response = HTTP_CLIENT
        .post(config.cadpet_url())
        .multipart(form)
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        debug!(%status, "pet cadastrado");

        Ok(ServerReply::Created)
    } else {
        // decode {"erro": "..."} when the server sent one; anything
        // malformed falls back to no message
        let message = response.json::<ErrorBody>().await.ok().and_then(|b| b.erro);

        debug!(%status, ?message, "cadastro recusado");

        Ok(ServerReply::Rejected { message })
    }
}
