//! OpenAI-compatible chat completions client

use async_trait::async_trait;
use cadence_config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::client::{CompletionParams, TextCompletionClient};
use crate::error::GenerationError;
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse, error_message};

/// Completion client for any OpenAI-compatible API
pub struct OpenAiCompletionClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
}

impl OpenAiCompletionClient {
    /// Create from configuration
    pub fn new(config: &LlmConfig) -> Result<Self, GenerationError> {
        let timeout = cadence_config::parse_duration("llm.timeout", &config.timeout)
            .map_err(|e| GenerationError::Config(e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| GenerationError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl TextCompletionClient for OpenAiCompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: CompletionParams,
    ) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %self.model, error = %e, "completion request failed");
                GenerationError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(model = %self.model, %status, "completion API returned error");
            return Err(GenerationError::Upstream(format!(
                "provider returned {status}: {}",
                error_message(&body)
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        body.into_text().ok_or(GenerationError::EmptyCompletion)
    }
}
