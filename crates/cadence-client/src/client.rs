use bytes::Bytes;
use cadence_core::{GeneratedText, GenerationMode};
use url::Url;

use crate::error::{ClientError, Result};
use crate::types::{
    ErrorResponse, GenerateAudioRequest, GenerateTextRequest, GenerateTextResponse, Health, PresetVoices,
    UploadedVoice,
};

/// Typed client for the Cadence HTTP API
#[derive(Debug, Clone)]
pub struct CadenceClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CadenceClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Use a preconfigured HTTP client (timeouts, proxies)
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn health(&self) -> Result<Health> {
        let response = self.http.get(self.url("/api/health")).send().await?;
        parse_json(handle_error(response).await?).await
    }

    /// Generate motivational text for a topic
    pub async fn generate_text(&self, prompt: &str, mode: GenerationMode) -> Result<GeneratedText> {
        let response = self
            .http
            .post(self.url("/api/generate-text"))
            .json(&GenerateTextRequest { prompt, mode })
            .send()
            .await?;

        let body: GenerateTextResponse = parse_json(handle_error(response).await?).await?;

        Ok(GeneratedText {
            content: body.text,
            mode: body.mode,
        })
    }

    /// Synthesize audio for `text`, optionally in the voice at `voice_url`
    ///
    /// Returns the WAV bytes. A [`ClientError::is_warming_up`] error means
    /// the synthesis service is cold starting.
    pub async fn generate_audio(&self, text: &str, voice_url: Option<&str>) -> Result<Bytes> {
        let response = self
            .http
            .post(self.url("/api/generate-audio"))
            .json(&GenerateAudioRequest { text, voice_url })
            .send()
            .await?;

        Ok(handle_error(response).await?.bytes().await?)
    }

    /// Upload a WAV or MP3 sample of the user's own voice
    pub async fn upload_voice(&self, audio: Vec<u8>, file_name: &str, mime: &str) -> Result<UploadedVoice> {
        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(file_name.to_owned())
            .mime_str(mime)
            .map_err(|e| ClientError::Config(format!("invalid mime type: {e}")))?;

        let form = reqwest::multipart::Form::new().part("audio", part);

        let response = self
            .http
            .post(self.url("/api/upload-voice"))
            .multipart(form)
            .send()
            .await?;

        parse_json(handle_error(response).await?).await
    }

    pub async fn preset_voices(&self) -> Result<PresetVoices> {
        let response = self.http.get(self.url("/api/preset-voices")).send().await?;
        parse_json(handle_error(response).await?).await
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(api_error(status.as_u16(), &body))
}

fn api_error(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => ClientError::Api {
            status,
            code: parsed.code,
            error: parsed.error,
            message: parsed.message,
        },
        Err(_) => ClientError::Api {
            status,
            code: "unknown".to_owned(),
            error: "Request failed".to_owned(),
            message: body.to_owned(),
        },
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}
