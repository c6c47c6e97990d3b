use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use cadence_core::GenerationMode;
use cadence_tts::AudioArtifact;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, payload::JsonPayload, state::AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateTextBody {
    pub prompt: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateTextResponse {
    pub success: bool,
    pub text: String,
    pub mode: GenerationMode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioBody {
    pub text: Option<String>,
    pub voice_url: Option<String>,
}

/// Handle `POST /api/generate-text`
pub async fn generate_text(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<GenerateTextBody>,
) -> Result<Json<GenerateTextResponse>, ApiError> {
    let request = cadence_guard::validate_generation(body.prompt.as_deref(), body.mode.as_deref())?;

    tracing::info!(mode = %request.mode, "generating text");

    let generated = state.generator.generate_text(&request.prompt, request.mode).await?;

    Ok(Json(GenerateTextResponse {
        success: true,
        text: generated.content,
        mode: generated.mode,
    }))
}

/// Handle `POST /api/generate-audio`
pub async fn generate_audio(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<GenerateAudioBody>,
) -> Result<Response, ApiError> {
    let request = cadence_guard::validate_synthesis(body.text.as_deref(), body.voice_url.as_deref())?;

    tracing::info!(
        text_chars = request.text.chars().count(),
        voice = request.voice_url.as_deref().unwrap_or("default"),
        "generating audio"
    );

    let audio = state
        .synthesizer
        .synthesize(&request.text, request.voice_url.as_deref())
        .await?;

    let artifact = AudioArtifact::new(audio);
    tracing::debug!(bytes = artifact.audio.len(), "audio generated");

    Ok(artifact.into_response())
}
