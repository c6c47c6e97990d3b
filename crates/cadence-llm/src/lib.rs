#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Text generation: mode-specific prompts sent to a chat-completions API

mod client;
mod error;
mod generator;
mod prompt;
mod protocol;
mod provider;

use std::sync::Arc;

pub use client::{CompletionParams, TextCompletionClient};
pub use error::GenerationError;
pub use generator::TextGenerator;
pub use prompt::PromptTemplate;
pub use provider::openai::OpenAiCompletionClient;

/// Build the text generator backed by the configured completion API
pub fn build_generator(config: &cadence_config::LlmConfig) -> anyhow::Result<TextGenerator> {
    let client = OpenAiCompletionClient::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize completion client: {e}"))?;

    Ok(TextGenerator::new(Arc::new(client)))
}
