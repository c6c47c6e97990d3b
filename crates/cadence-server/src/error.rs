use axum::{
    Json,
    response::{IntoResponse, Response},
};
use cadence_core::{ErrorBody, HttpError};
use http::{HeaderValue, StatusCode, header::RETRY_AFTER};

/// Any domain error on its way out as a uniform JSON response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
    retry_after: Option<u64>,
}

impl ApiError {
    #[must_use]
    pub const fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl<E: HttpError> From<E> for ApiError {
    fn from(error: E) -> Self {
        let status = error.status_code();

        if status.is_server_error() {
            tracing::error!(code = error.error_code(), "request failed: {error}");
        } else {
            tracing::debug!(code = error.error_code(), "request rejected: {error}");
        }

        Self {
            status,
            body: error.to_body(),
            retry_after: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();

        if let Some(seconds) = self.retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(seconds));
        }

        response
    }
}

/// Response for a handler that panicked, without internals
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("handler panicked: {detail}");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
}
