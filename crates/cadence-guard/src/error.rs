use cadence_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Which limiter rejected a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitScope {
    /// Every route under `/api`
    General,
    /// Audio generation only
    Audio,
}

/// Rate limiting errors
#[derive(Debug, Error)]
pub enum RateLimitError {
    /// Configuration error
    #[error("rate limit configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    Exceeded {
        scope: LimitScope,
        /// Seconds until the next request would be admitted
        retry_after: u64,
    },
}

impl HttpError for RateLimitError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Exceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::Config(_) => "internal_error",
            Self::Exceeded { .. } => "rate_limited",
        }
    }

    fn summary(&self) -> &str {
        "Too many requests"
    }

    fn client_message(&self) -> String {
        match self {
            Self::Config(_) => "rate limiter unavailable".to_owned(),
            Self::Exceeded {
                scope: LimitScope::General,
                ..
            } => "Too many requests from this IP, please try again later.".to_owned(),
            Self::Exceeded {
                scope: LimitScope::Audio,
                ..
            } => "TTS rate limit exceeded. Please wait before generating more audio.".to_owned(),
        }
    }
}

/// Rejected input, always caught before any upstream call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Prompt is required")]
    MissingPrompt,

    #[error("Mode must be \"speech\" or \"song\"")]
    InvalidMode,

    #[error("Prompt too long (max {max} characters)")]
    PromptTooLong { max: usize },

    #[error("Text is required")]
    MissingText,

    #[error("Text too long (max {max} characters)")]
    TextTooLong { max: usize },

    #[error("Voice URL must be an absolute http(s) URL: {0}")]
    InvalidVoiceUrl(String),

    #[error("Failed to parse request body: {0}")]
    MalformedBody(String),

    #[error("Request body is too large, limit is {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("Unsupported Content-Type, expected: 'Content-Type: application/json'")]
    UnsupportedContentType,
}

impl HttpError for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::UnsupportedContentType => "unsupported_content_type",
            _ => "validation_error",
        }
    }

    fn summary(&self) -> &str {
        "Invalid request"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
