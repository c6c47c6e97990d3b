use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Remote speech synthesis service configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Service base URL (the client appends `/tts`)
    pub base_url: Url,
    /// Sent as the `x-api-key` header
    pub api_key: SecretString,
    /// Generous by default since the service may be cold-starting
    #[serde(default = "default_timeout")]
    pub timeout: String,
    #[serde(default = "default_rate")]
    pub speed: f64,
    #[serde(default = "default_rate")]
    pub pitch: f64,
}

fn default_timeout() -> String {
    "2m".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_rate() -> f64 {
    1.0
}
