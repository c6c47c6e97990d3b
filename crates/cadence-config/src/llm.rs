use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Completion API configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Bearer credential for the completion API
    pub api_key: SecretString,
    /// OpenAI-compatible base URL (the client appends `/chat/completions`)
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with every completion
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout (e.g. "60s")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

#[allow(clippy::missing_panics_doc)]
fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1").expect("valid default URL")
}

fn default_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_timeout() -> String {
    "60s".to_string()
}
