use cadence_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Upload failures
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Invalid file type. Only WAV and MP3 are allowed. (got {0})")]
    UnsupportedMediaType(String),

    #[error("File too large (max {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("No audio file uploaded")]
    MissingFile,

    #[error("failed to store voice sample: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError for VoiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::UnsupportedMediaType(_) => "unsupported_media_type",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::MissingFile => "missing_file",
            Self::Io(_) => "upload_failed",
        }
    }

    fn summary(&self) -> &str {
        "Failed to upload voice"
    }

    fn client_message(&self) -> String {
        match self {
            Self::Io(_) => "the voice sample could not be saved".to_owned(),
            other => other.to_string(),
        }
    }
}
