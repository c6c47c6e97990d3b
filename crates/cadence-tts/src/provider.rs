pub mod remote;

use async_trait::async_trait;
use bytes::Bytes;

/// Narrow capability over a speech synthesis service
#[async_trait]
pub trait SpeechSynthesisClient: Send + Sync {
    /// Synthesize `text`, optionally conditioned on the voice sample at `voice_url`
    ///
    /// Returns the raw audio buffer exactly as the service produced it.
    async fn synthesize(&self, text: &str, voice_url: Option<&str>) -> crate::error::Result<Bytes>;
}
