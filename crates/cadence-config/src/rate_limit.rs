use serde::Deserialize;

/// Rate limiting configuration
///
/// Two independent limiters keyed by client address: `general` covers every
/// route under `/api`, `audio` covers only audio generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_general")]
    pub general: RequestRateLimit,
    #[serde(default = "default_audio")]
    pub audio: RequestRateLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            general: default_general(),
            audio: default_audio(),
        }
    }
}

/// Request-count limit over a window
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestRateLimit {
    /// Maximum requests per window
    pub requests: u32,
    /// Window duration (e.g. "1m", "15m")
    pub window: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_general() -> RequestRateLimit {
    RequestRateLimit {
        requests: 100,
        window: "15m".to_string(),
    }
}

fn default_audio() -> RequestRateLimit {
    RequestRateLimit {
        requests: 10,
        window: "1m".to_string(),
    }
}
