use serde::{Deserialize, Serialize};

use cadence_core::GenerationMode;

/// `GET /api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateTextRequest<'a> {
    pub prompt: &'a str,
    pub mode: GenerationMode,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateTextResponse {
    pub text: String,
    pub mode: GenerationMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateAudioRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<&'a str>,
}

/// `POST /api/upload-voice`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedVoice {
    pub voice_url: String,
    pub message: String,
    /// Ownership attestation to show the user
    pub disclaimer: String,
}

/// One entry of `GET /api/preset-voices`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresetVoice {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub style: Option<String>,
}

/// `GET /api/preset-voices`
#[derive(Debug, Clone, Deserialize)]
pub struct PresetVoices {
    pub voices: Vec<PresetVoice>,
    pub disclaimer: String,
}

/// Uniform error body returned by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
}
