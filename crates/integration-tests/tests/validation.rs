//! Invalid input is rejected before any upstream call

mod harness;

use cadence_client::{ClientError, GenerationMode};
use harness::config::ConfigBuilder;
use harness::mock_llm::MockLlm;
use harness::mock_tts::MockTts;
use harness::server::TestServer;

async fn setup() -> (MockLlm, MockTts, TestServer) {
    let llm = MockLlm::start().await.unwrap();
    let tts = MockTts::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&llm.base_url(), &tts.base_url()).build())
        .await
        .unwrap();
    (llm, tts, server)
}

fn api_message(err: &ClientError) -> (u16, &str, &str) {
    match err {
        ClientError::Api {
            status, code, message, ..
        } => (*status, code.as_str(), message.as_str()),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn prompt_length_boundaries() {
    let (llm, _tts, server) = setup().await;
    let client = server.cadence();

    let exactly_max = "a".repeat(500);
    client.generate_text(&exactly_max, GenerationMode::Speech).await.unwrap();
    assert_eq!(llm.completion_count(), 1);

    let too_long = "a".repeat(501);
    let err = client.generate_text(&too_long, GenerationMode::Speech).await.unwrap_err();
    assert_eq!(
        api_message(&err),
        (400, "validation_error", "Prompt too long (max 500 characters)")
    );

    let err = client.generate_text("   ", GenerationMode::Speech).await.unwrap_err();
    assert_eq!(api_message(&err), (400, "validation_error", "Prompt is required"));

    assert_eq!(llm.completion_count(), 1);
}

#[tokio::test]
async fn unknown_mode_is_rejected() {
    let (llm, _tts, server) = setup().await;

    let resp = server
        .client()
        .post(server.url("/api/generate-text"))
        .json(&serde_json::json!({"prompt": "resilience", "mode": "poem"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(body["message"], "Mode must be \"speech\" or \"song\"");
    assert_eq!(llm.completion_count(), 0);
}

#[tokio::test]
async fn text_length_boundaries() {
    let (_llm, tts, server) = setup().await;
    let client = server.cadence();

    client.generate_audio(&"a".repeat(10_000), None).await.unwrap();

    let err = client.generate_audio(&"a".repeat(10_001), None).await.unwrap_err();
    assert_eq!(
        api_message(&err),
        (400, "validation_error", "Text too long (max 10000 characters)")
    );

    let err = client.generate_audio("", None).await.unwrap_err();
    assert_eq!(api_message(&err), (400, "validation_error", "Text is required"));

    assert_eq!(tts.request_count(), 1);
}

#[tokio::test]
async fn voice_url_must_be_http() {
    let (_llm, tts, server) = setup().await;

    let err = server
        .cadence()
        .generate_audio("Keep going.", Some("file:///etc/passwd"))
        .await
        .unwrap_err();

    assert_eq!(api_message(&err).0, 400);
    assert_eq!(tts.request_count(), 0);
}

#[tokio::test]
async fn json_content_type_is_required() {
    let (llm, _tts, server) = setup().await;

    let resp = server
        .client()
        .post(server.url("/api/generate-text"))
        .header("content-type", "text/plain")
        .body(r#"{"prompt":"grit","mode":"speech"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 415);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "unsupported_content_type");
    assert_eq!(llm.completion_count(), 0);
}
