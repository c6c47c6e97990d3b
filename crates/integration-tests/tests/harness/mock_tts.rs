//! Mock synthesis service for integration tests
//!
//! Accepts `POST /tts` with the JSON body the synthesis client sends and
//! answers with WAV bytes, an error status, or nothing for a while

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

use super::SAMPLE_WAV;

/// Mock synthesis service
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    request_count: AtomicU32,
    behavior: Behavior,
    last_body: Mutex<Option<serde_json::Value>>,
    last_api_key: Mutex<Option<String>>,
}

#[derive(Clone, Copy)]
enum Behavior {
    Audio,
    /// Sleep before answering, like a cold-starting instance
    Delay(Duration),
    Fail(StatusCode),
}

impl MockTts {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Audio).await
    }

    /// Start a mock that takes `delay` to answer each request
    pub async fn start_slow(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Delay(delay)).await
    }

    /// Start a mock that answers every request with `status`
    pub async fn start_failing(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Fail(status)).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            request_count: AtomicU32::new(0),
            behavior,
            last_body: Mutex::new(None),
            last_api_key: Mutex::new(None),
        });

        let app = Router::new()
            .route("/tts", routing::post(handle_tts))
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

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }

    /// The most recent JSON body received
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.state.last_body.lock().expect("lock").clone()
    }

    /// The `x-api-key` header of the most recent request
    pub fn last_api_key(&self) -> Option<String> {
        self.state.last_api_key.lock().expect("lock").clone()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_tts(
    State(state): State<Arc<MockTtsState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    *state.last_body.lock().expect("lock") = Some(body);
    *state.last_api_key.lock().expect("lock") = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    match state.behavior {
        Behavior::Audio => wav_response(),
        Behavior::Delay(delay) => {
            tokio::time::sleep(delay).await;
            wav_response()
        }
        Behavior::Fail(status) => (status, "model crashed while loading weights").into_response(),
    }
}

fn wav_response() -> Response {
    ([(header::CONTENT_TYPE, "audio/wav")], SAMPLE_WAV).into_response()
}
