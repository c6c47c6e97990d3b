#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Audio synthesis through a remote text-to-speech service

mod error;
mod http_client;
mod provider;
mod types;

use std::sync::Arc;

pub use error::{Result, SynthesisError};
pub use provider::{SpeechSynthesisClient, remote::RemoteSynthesisClient};
pub use types::AudioArtifact;

/// Build the synthesis client from configuration
pub fn build_client(config: &cadence_config::TtsConfig) -> anyhow::Result<Arc<dyn SpeechSynthesisClient>> {
    let client = RemoteSynthesisClient::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize synthesis client: {e}"))?;

    tracing::debug!(base_url = %config.base_url, timeout = %config.timeout, "synthesis client initialized");

    Ok(Arc::new(client))
}
