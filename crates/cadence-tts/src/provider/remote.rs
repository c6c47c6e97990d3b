use std::error::Error as _;
use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use cadence_config::TtsConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::SpeechSynthesisClient;
use crate::{error::SynthesisError, http_client::http_client, types::TtsRequest};

/// Header carrying the synthesis service credential
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the JSON-in / audio-out synthesis service
pub struct RemoteSynthesisClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    speed: f64,
    pitch: f64,
}

impl RemoteSynthesisClient {
    pub fn new(config: &TtsConfig) -> crate::error::Result<Self> {
        let timeout = cadence_config::parse_duration("tts.timeout", &config.timeout)
            .map_err(|e| SynthesisError::Config(e.to_string()))?;

        let client =
            http_client(timeout).map_err(|e| SynthesisError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: tts_endpoint(&config.base_url),
            api_key: config.api_key.clone(),
            speed: config.speed,
            pitch: config.pitch,
        })
    }
}

fn tts_endpoint(base_url: &Url) -> String {
    format!("{}/tts", base_url.as_str().trim_end_matches('/'))
}

#[async_trait]
impl SpeechSynthesisClient for RemoteSynthesisClient {
    async fn synthesize(&self, text: &str, voice_url: Option<&str>) -> crate::error::Result<Bytes> {
        tracing::debug!(
            text_chars = text.chars().count(),
            has_voice = voice_url.is_some(),
            "synthesis request"
        );

        let body = TtsRequest {
            text,
            voice_url,
            speed: self.speed,
            pitch: self.pitch,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("synthesis service error ({status}): {message}");

            return Err(SynthesisError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await.map_err(classify_transport_error)?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::debug!("synthesis complete, {} bytes", audio.len());

        Ok(audio)
    }
}

/// Map a transport failure, separating cold starts from other errors
fn classify_transport_error(error: reqwest::Error) -> SynthesisError {
    if is_warming_up(&error) {
        tracing::warn!("synthesis service timed out, likely cold starting: {error}");
        SynthesisError::ServiceWarmingUp
    } else {
        tracing::error!("synthesis request failed: {error}");
        SynthesisError::Connection(error.to_string())
    }
}

fn is_warming_up(error: &reqwest::Error) -> bool {
    if error.is_timeout() {
        return true;
    }

    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>()
            && matches!(
                io_error.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::ConnectionAborted | io::ErrorKind::ConnectionReset
            )
        {
            return true;
        }
        source = cause.source();
    }

    false
}
