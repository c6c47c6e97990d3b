#![allow(clippy::must_use_candidate)]

pub mod client_ip;
pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod rate_limit;
pub mod server;
pub mod telemetry;
pub mod tts;
pub mod voices;

use serde::Deserialize;

pub use client_ip::*;
pub use cors::*;
pub use health::*;
pub use llm::*;
pub use rate_limit::*;
pub use server::*;
pub use telemetry::TelemetryConfig;
pub use tts::*;
pub use voices::*;

/// Top-level Cadence configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API used for text generation
    pub llm: LlmConfig,
    /// Remote speech synthesis service
    pub tts: TtsConfig,
    /// Voice reference storage
    #[serde(default)]
    pub voices: VoicesConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

/// Parse a human-readable duration such as `"15m"` or `"2m"`
///
/// # Errors
///
/// Returns an error naming the offending field when the value does not parse
pub fn parse_duration(field: &str, value: &str) -> anyhow::Result<std::time::Duration> {
    duration_str::parse(value).map_err(|e| anyhow::anyhow!("invalid duration for {field} '{value}': {e}"))
}
