use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use cadence_guard::ValidationError;
use cadence_voices::{CONSENT_DISCLAIMER, PRESET_DISCLAIMER, UPLOAD_MESSAGE, VoiceError};
use http::StatusCode;
use serde::Serialize;

use crate::{error::ApiError, origin::RequestOrigin, state::AppState};

/// Multipart field carrying the voice sample
const AUDIO_FIELD: &str = "audio";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub voice_url: String,
    pub message: &'static str,
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PresetVoicesResponse {
    pub success: bool,
    pub voices: Vec<PresetVoiceEntry>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PresetVoiceEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub style: Option<String>,
}

/// Handle `POST /api/upload-voice`
pub async fn upload_voice(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!("upload without a multipart body: {rejection}");
        VoiceError::MissingFile
    })?;

    let limit = state.uploads.max_bytes();

    while let Some(field) = multipart.next_field().await.map_err(|e| multipart_error(&e, limit))? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let mime = field.content_type().unwrap_or("application/octet-stream").to_owned();
        state.uploads.check_media_type(&mime)?;

        let bytes = field.bytes().await.map_err(|e| multipart_error(&e, limit))?;
        let stored = state.uploads.store_upload(&bytes, &mime).await?;
        let reference = state.uploads.reference(&stored, &origin);

        return Ok(Json(UploadResponse {
            success: true,
            voice_url: reference.url,
            message: UPLOAD_MESSAGE,
            disclaimer: CONSENT_DISCLAIMER,
        }));
    }

    Err(VoiceError::MissingFile.into())
}

/// Body-limit failures surface as oversize uploads, the rest as bad input
fn multipart_error(error: &axum::extract::multipart::MultipartError, limit: usize) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        VoiceError::PayloadTooLarge { limit }.into()
    } else {
        ValidationError::MalformedBody(error.body_text()).into()
    }
}

/// Handle `GET /api/preset-voices`
pub async fn preset_voices(
    State(state): State<AppState>,
    RequestOrigin(origin): RequestOrigin,
) -> Json<PresetVoicesResponse> {
    let voices = state
        .catalog
        .references(&origin)
        .into_iter()
        .map(|reference| PresetVoiceEntry {
            id: reference.id,
            name: reference.display_name,
            description: reference.description,
            url: reference.url,
            style: reference.style,
        })
        .collect();

    Json(PresetVoicesResponse {
        success: true,
        voices,
        disclaimer: PRESET_DISCLAIMER,
    })
}
