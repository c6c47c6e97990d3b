use cadence_core::HttpError;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Synthesis failures, with cold starts kept distinct
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The service timed out or dropped the connection, usually while an
    /// idle instance is starting; the caller should retry shortly
    #[error("TTS service is starting up. Please try again in a moment.")]
    ServiceWarmingUp,

    /// The service answered with a non-success status
    #[error("synthesis service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Any other transport failure
    #[error("failed to reach synthesis service: {0}")]
    Connection(String),

    /// The service answered with an empty body
    #[error("synthesis service returned no audio")]
    EmptyAudio,

    /// Client could not be constructed
    #[error("synthesis client configuration error: {0}")]
    Config(String),
}

impl SynthesisError {
    /// Whether the caller should simply retry after a short delay
    pub const fn is_warming_up(&self) -> bool {
        matches!(self, Self::ServiceWarmingUp)
    }
}

impl HttpError for SynthesisError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_code(&self) -> &str {
        match self {
            Self::ServiceWarmingUp => "service_warming_up",
            _ => "synthesis_failed",
        }
    }

    fn summary(&self) -> &str {
        "Failed to generate audio"
    }

    fn client_message(&self) -> String {
        match self {
            Self::Config(_) => "audio generation is not available".to_owned(),
            other => other.to_string(),
        }
    }
}
