use async_trait::async_trait;

use crate::error::GenerationError;

/// Sampling parameters for a single completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Narrow capability over a text-completion API
///
/// Implementations must surface every failure as a `GenerationError`; no
/// provider-specific error crosses this boundary.
#[async_trait]
pub trait TextCompletionClient: Send + Sync {
    /// Run one completion and return the generated text
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: CompletionParams,
    ) -> Result<String, GenerationError>;
}
