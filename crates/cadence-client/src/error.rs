/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the Cadence client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("{status} {code}: {message}")]
    Api {
        status: u16,
        /// Machine-readable code, e.g. `service_warming_up`
        code: String,
        /// Short summary of the failed operation
        error: String,
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A flow step was attempted out of order
    #[error("invalid flow state: {0}")]
    InvalidState(String),
}

impl ClientError {
    /// The synthesis service is cold starting; retrying shortly should work
    pub fn is_warming_up(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "service_warming_up")
    }

    /// The server rate limited this client
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { status: 429, .. })
    }
}
