use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each adapter crate's error type. The server layer turns
/// these into responses, keeping domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable code (e.g. `service_warming_up`)
    fn error_code(&self) -> &str;

    /// Short human-readable summary of the failed operation
    fn summary(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Uniform response body for this error
    fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.summary().to_owned(),
            message: self.client_message(),
            code: self.error_code().to_owned(),
        }
    }
}

/// Uniform `{error, message, code}` error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub code: String,
}

impl ErrorBody {
    /// Body for failures that must not leak internals
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_owned(),
            message: "an unexpected error occurred".to_owned(),
            code: "internal_error".to_owned(),
        }
    }
}
