use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use cadence_guard::{KeyedLimiter, RateLimitError};

use crate::{client_ip::ClientAddr, error::ApiError};

/// Rate limiting middleware keyed by client address
///
/// Rejected requests never reach the handler.
pub async fn rate_limit_middleware(State(limiter): State<KeyedLimiter>, request: Request, next: Next) -> Response {
    let key = request
        .extensions()
        .get::<ClientAddr>()
        .map_or(ClientAddr::UNKNOWN, |ClientAddr(addr)| addr.as_str());

    if let Err(error) = limiter.check(key) {
        tracing::warn!(client = key, scope = ?limiter.scope(), "rate limit exceeded");
        return rate_limit_response(error);
    }

    next.run(request).await
}

fn rate_limit_response(error: RateLimitError) -> Response {
    let retry_after = match error {
        RateLimitError::Exceeded { retry_after, .. } => Some(retry_after),
        RateLimitError::Config(_) => None,
    };

    let api_error = ApiError::from(error);

    match retry_after {
        Some(seconds) => api_error.with_retry_after(seconds).into_response(),
        None => api_error.into_response(),
    }
}
