use bytes::Bytes;
use serde::Serialize;

/// Body sent to the synthesis service
#[derive(Debug, Serialize)]
pub(crate) struct TtsRequest<'a> {
    pub text: &'a str,
    /// Serialized as `null` when no voice reference is active
    pub voice_url: Option<&'a str>,
    pub speed: f64,
    pub pitch: f64,
}

/// Synthesized audio returned directly to the caller, never persisted
pub struct AudioArtifact {
    pub audio: Bytes,
}

impl AudioArtifact {
    pub const CONTENT_TYPE: &'static str = "audio/wav";
    pub const FILE_NAME: &'static str = "motivational_audio.wav";

    pub const fn new(audio: Bytes) -> Self {
        Self { audio }
    }
}

impl axum::response::IntoResponse for AudioArtifact {
    fn into_response(self) -> axum::response::Response {
        let disposition = format!("attachment; filename={}", Self::FILE_NAME);

        (
            [
                (http::header::CONTENT_TYPE, Self::CONTENT_TYPE.to_owned()),
                (http::header::CONTENT_DISPOSITION, disposition),
            ],
            axum::body::Body::from(self.audio),
        )
            .into_response()
    }
}
