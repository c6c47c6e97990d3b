use serde::{Deserialize, Serialize};

/// Kind of text to generate
///
/// The mode alone selects the prompt template, length target and token
/// budget used downstream.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationMode {
    /// Long-form motivational speech
    Speech,
    /// Spoken-word / rap piece, never sung
    Song,
}

/// A validated text generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub mode: GenerationMode,
}

/// Text produced by the completion API
///
/// Never stored server-side; the client sends it back for synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub content: String,
    pub mode: GenerationMode,
}

/// A validated audio synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    /// At most one voice reference per call, forwarded exactly as given
    pub voice_url: Option<String>,
}
