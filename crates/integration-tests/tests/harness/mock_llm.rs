//! Mock completion backend for integration tests
//!
//! Implements the slice of the OpenAI chat completions API the text
//! generator uses and returns canned responses

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Text every successful completion returns
pub const CANNED_TEXT: &str = "Fear is a feeling, not a fact. Step forward anyway, and watch it shrink.";

/// Mock completion backend with predictable responses
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    completion_count: AtomicU32,
    behavior: Behavior,
    last_request: Mutex<Option<CompletionRequest>>,
}

#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    Unauthorized,
    Empty,
}

/// What the generator sent, as seen by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl MockLlm {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Succeed).await
    }

    /// Start a mock that rejects every request with 401
    pub async fn start_unauthorized() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Unauthorized).await
    }

    /// Start a mock whose completions have no content
    pub async fn start_empty() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Empty).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            completion_count: AtomicU32::new(0),
            behavior,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for the completion client
    ///
    /// Includes `/v1` since the client appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::SeqCst)
    }

    /// The most recent request body
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.state.last_request.lock().expect("lock").clone()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    Json(request): Json<CompletionRequest>,
) -> Response {
    state.completion_count.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock().expect("lock") = Some(request);

    match state.behavior {
        Behavior::Succeed => Json(serde_json::json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": CANNED_TEXT},
                "finish_reason": "stop"
            }]
        }))
        .into_response(),
        Behavior::Empty => Json(serde_json::json!({
            "id": "chatcmpl-mock",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": ""}}]
        }))
        .into_response(),
        Behavior::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })),
        )
            .into_response(),
    }
}
