//! HTTP behaviour of `HttpApi` against a mock backend.

use docchat_client::{ApiConfig, AskRequest, DocumentApi, Error, HttpApi};
use docchat_core::{Reference, StreamEvent, TotalTokens};
use futures::StreamExt;
use mockito::Matcher;
use serde_json::json;

fn api_for(server: &mockito::ServerGuard) -> HttpApi {
    HttpApi::new(ApiConfig::new(server.url())).expect("valid mock url")
}

#[tokio::test]
async fn ask_streams_events_in_order() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let body = concat!(
        "{\"type\":\"chunk\",\"content\":\"Take \"}\n",
        "\n",
        "{\"type\":\"chunk\",\"content\":\"5mg. Page no: 4\"}\n",
        "{\"type\":\"telemetry\",\"ms\":12}\n",
        "{\"type\":\"end\",\"references\":[{\"id\":\"file-1\",\"name\":\"label.pdf\"}],\"total_tokens\":321}\n",
    );
    let mock = server
        .mock("POST", "/ask")
        .match_body(Matcher::Json(json!({
            "question": "Dose?",
            "document_id": "file-1"
        })))
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body(body)
        .create_async()
        .await;

    let api = api_for(&server);
    let stream = api.ask(AskRequest::new("Dose?", "file-1")?).await?;
    let events: Vec<StreamEvent> = stream
        .map(|item| item.expect("no transport error"))
        .collect()
        .await;

    mock.assert_async().await;
    assert_eq!(
        events,
        vec![
            StreamEvent::chunk("Take "),
            StreamEvent::chunk("5mg. Page no: 4"),
            StreamEvent::end(
                vec![Reference::new("file-1", "label.pdf")],
                Some(TotalTokens::Count(321))
            ),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn ask_maps_error_status() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/ask")
        .with_status(422)
        .with_body("{\"detail\":\"Question cannot be empty\"}")
        .create_async()
        .await;

    let api = api_for(&server);
    let err = match api.ask(AskRequest::new("Q", "doc")?).await {
        Ok(_) => panic!("expected an error status"),
        Err(e) => e,
    };
    assert!(matches!(err, Error::Status { status: 422, .. }));
    assert_eq!(err.to_string(), "HTTP error! status: 422");
    Ok(())
}

#[tokio::test]
async fn list_journals_decodes_catalogue() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/journals")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": "file-A",
                "title": "Amlodipine",
                "desc": "Medical guidelines",
                "img": "./images/j21.jpg",
                "defaultDocumentQuestions": [
                    {"id": "1", "Question": "What is the main indication?"}
                ]
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let journals = api_for(&server).list_journals().await?;
    assert_eq!(journals.len(), 1);
    assert_eq!(journals[0].title, "Amlodipine");
    assert_eq!(
        journals[0].default_questions[0].question,
        "What is the main indication?"
    );
    Ok(())
}

#[tokio::test]
async fn health_reports_service() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy","service":"Medical Document Assistant API"}"#)
        .create_async()
        .await;

    let health = api_for(&server).health().await?;
    assert_eq!(health.status, "healthy");
    Ok(())
}

#[test]
fn pdf_url_uses_base() {
    let api = HttpApi::new(ApiConfig::new("http://docs.local:8000/")).unwrap();
    assert_eq!(api.pdf_url("file-9"), "http://docs.local:8000/pdf/file-9");
}

#[test]
fn rejects_invalid_base() {
    assert!(matches!(
        HttpApi::new(ApiConfig::new("localhost:8000")),
        Err(Error::InvalidBaseUrl(_))
    ));
}
