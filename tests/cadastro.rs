use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patas_forms::components::{FeedbackSink, PetRegistrationForm, SubmitError};
use patas_forms::structures::forms::{PetCreation, PhotoFile};
use patas_forms::structures::models::ServerReply;
use patas_forms::ApiConfig;

#[derive(Default)]
struct Alerts(Vec<String>);

impl FeedbackSink for Alerts {
    fn alert(&mut self, message: &str) {
        self.0.push(message.to_owned());
    }
}

fn filled_form(base_url: String) -> PetRegistrationForm<'static> {
    let mut form = PetRegistrationForm::new(ApiConfig::new(base_url));

    form.load(PetCreation {
        nome: "Rex".to_owned(),
        raca: "vira-lata".to_owned(),
        peso: "12,5".to_owned(),
        idade: "3".to_owned(),
        sexo: "M".to_owned(),
        obs: "muito dócil".to_owned(),
    });

    form
}

async fn mount_cadpet(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/cadpet/"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn created_reply_resets_the_whole_form() {
    let server = MockServer::start().await;
    mount_cadpet(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "mensagem": "Pet cadastrado com sucesso",
        })),
    )
    .await;

    let mut form = filled_form(server.uri());
    form.on_file_selected(Some(PhotoFile::new("rex.png", "image/png", b"fake png".to_vec())));
    let mut alerts = Alerts::default();

    let reply = form.on_submit(&mut alerts).await.unwrap();

    assert_eq!(reply, ServerReply::Created);
    assert_eq!(alerts.0, ["Pet cadastrado com sucesso!"]);
    assert!(form.fields().values().all(String::is_empty));
    assert!(form.preview().is_placeholder());
    assert!(form.photo().is_none());
}

#[tokio::test]
async fn rejected_reply_surfaces_the_server_message_and_keeps_state() {
    let server = MockServer::start().await;
    mount_cadpet(
        &server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "erro": "Nome obrigatório",
        })),
    )
    .await;

    let mut form = filled_form(server.uri());
    form.on_file_selected(Some(PhotoFile::new("rex.png", "image/png", b"fake png".to_vec())));
    let before = form.fields().clone();
    let mut alerts = Alerts::default();

    let reply = form.on_submit(&mut alerts).await.unwrap();

    assert_eq!(
        reply,
        ServerReply::Rejected {
            message: Some("Nome obrigatório".to_owned()),
        }
    );
    assert_eq!(alerts.0, ["Erro: Nome obrigatório"]);
    assert_eq!(form.fields(), &before);
    assert!(!form.preview().is_placeholder());
    assert!(form.photo().is_some());
}

#[tokio::test]
async fn rejected_reply_without_erro_falls_back_to_the_generic_message() {
    let server = MockServer::start().await;
    mount_cadpet(
        &server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({})),
    )
    .await;

    let mut form = filled_form(server.uri());
    let mut alerts = Alerts::default();

    let reply = form.on_submit(&mut alerts).await.unwrap();

    assert_eq!(reply, ServerReply::Rejected { message: None });
    assert_eq!(alerts.0, ["Erro: Erro desconhecido."]);
}

#[tokio::test]
async fn rejected_reply_with_unparseable_body_falls_back_too() {
    let server = MockServer::start().await;
    mount_cadpet(
        &server,
        ResponseTemplate::new(500).set_body_string("<html>Server Error (500)</html>"),
    )
    .await;

    let mut form = filled_form(server.uri());
    let mut alerts = Alerts::default();

    let reply = form.on_submit(&mut alerts).await.unwrap();

    assert_eq!(reply, ServerReply::Rejected { message: None });
    assert_eq!(alerts.0, ["Erro: Erro desconhecido."]);
}

#[tokio::test]
async fn network_failure_alerts_and_leaves_the_form_untouched() {
    // nothing listens here; the connection is refused
    let mut form = filled_form("http://127.0.0.1:9".to_owned());
    let before = form.fields().clone();
    let mut alerts = Alerts::default();

    let result = form.on_submit(&mut alerts).await;

    assert!(matches!(result, Err(SubmitError::Network(_))));
    assert_eq!(alerts.0, ["Falha de comunicação com o servidor."]);
    assert_eq!(form.fields(), &before);
    assert!(!form.is_in_flight());
}

#[tokio::test]
async fn photo_travels_as_exactly_one_foto_part() {
    let server = MockServer::start().await;
    mount_cadpet(&server, ResponseTemplate::new(200)).await;

    let mut form = filled_form(server.uri());
    form.on_file_selected(Some(PhotoFile::new("rex.png", "image/png", b"fake png".to_vec())));
    let mut alerts = Alerts::default();

    form.on_submit(&mut alerts).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);

    assert_eq!(body.matches("name=\"foto\"").count(), 1);
    assert!(body.contains("fake png"));
    assert!(body.contains("name=\"nome\""));
    assert!(body.contains("Rex"));
}

#[tokio::test]
async fn no_selection_means_no_foto_part() {
    let server = MockServer::start().await;
    mount_cadpet(&server, ResponseTemplate::new(200)).await;

    let mut form = filled_form(server.uri());
    let mut alerts = Alerts::default();

    form.on_submit(&mut alerts).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);

    assert!(!body.contains("name=\"foto\""));
    assert!(body.contains("name=\"nome\""));
}

#[tokio::test]
async fn a_second_submission_while_one_is_pending_is_rejected() {
    let server = MockServer::start().await;
    mount_cadpet(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_secs(60)),
    )
    .await;

    let mut form = filled_form(server.uri());
    let mut alerts = Alerts::default();

    {
        let mut pending = tokio_test::task::spawn(form.on_submit(&mut alerts));
        assert!(pending.poll().is_pending());
        // abandoned mid-flight; the request may still be on the wire
    }

    let result = form.on_submit(&mut alerts).await;

    assert!(matches!(result, Err(SubmitError::InFlight)));
}
