use cadence_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport failure or non-success status from the completion API
    #[error("{0}")]
    Upstream(String),

    /// Completion API answered with a body we could not read
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),

    /// Completion API answered without any text
    #[error("completion returned no content")]
    EmptyCompletion,

    /// Client could not be constructed
    #[error("completion client configuration error: {0}")]
    Config(String),
}

impl HttpError for GenerationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_code(&self) -> &str {
        "generation_failed"
    }

    fn summary(&self) -> &str {
        "Failed to generate text"
    }

    fn client_message(&self) -> String {
        match self {
            Self::Config(_) => "text generation is not available".to_owned(),
            other => other.to_string(),
        }
    }
}
