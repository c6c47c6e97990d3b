use std::sync::Arc;

use cadence_core::{GeneratedText, GenerationMode};

use crate::{client::TextCompletionClient, error::GenerationError, prompt::PromptTemplate};

/// Turns a topic and mode into motivational text
#[derive(Clone)]
pub struct TextGenerator {
    client: Arc<dyn TextCompletionClient>,
}

impl TextGenerator {
    pub fn new(client: Arc<dyn TextCompletionClient>) -> Self {
        Self { client }
    }

    /// Generate text for `prompt` in the given `mode`
    ///
    /// Exactly one completion call is made. The prompt is expected to be
    /// validated already.
    pub async fn generate_text(&self, prompt: &str, mode: GenerationMode) -> Result<GeneratedText, GenerationError> {
        let template = PromptTemplate::for_mode(mode);
        let user_prompt = template.user_prompt(prompt);

        tracing::debug!(%mode, prompt_chars = prompt.chars().count(), "generating text");

        let content = self
            .client
            .complete(template.system, &user_prompt, template.params)
            .await
            .inspect_err(|e| tracing::warn!(%mode, error = %e, "text generation failed"))?;

        tracing::debug!(%mode, words = content.split_whitespace().count(), "text generated");

        Ok(GeneratedText { content, mode })
    }
}
