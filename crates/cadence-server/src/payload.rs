use axum::body::Body;
use cadence_guard::ValidationError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extractor for JSON request bodies
///
/// Requires `Content-Type: application/json` and bounds the body size. Any
/// parse failure is reported as a validation error rather than axum's
/// plain-text rejection.
pub struct JsonPayload<T>(pub T);

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !is_json(&parts.headers) {
            return Err(ValidationError::UnsupportedContentType.into());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                ValidationError::BodyTooLarge {
                    limit: BODY_LIMIT_BYTES,
                }
            } else {
                ValidationError::MalformedBody(err.to_string())
            }
        })?;

        let body = serde_json::from_slice::<T>(&bytes).map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

        Ok(Self(body))
    }
}

fn is_json(headers: &http::HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use axum::extract::FromRequest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        prompt: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> http::Request<Body> {
        let mut builder = http::Request::post("/api/generate-text");
        if let Some(content_type) = content_type {
            builder = builder.header(http::header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn accepts_json_with_charset() {
        let JsonPayload(probe) =
            JsonPayload::<Probe>::from_request(request(Some("application/json; charset=utf-8"), r#"{"prompt":"x"}"#), &())
                .await
                .unwrap();

        assert_eq!(probe.prompt.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn other_content_types_are_unsupported() {
        let Err(err) = JsonPayload::<Probe>::from_request(request(Some("text/plain"), "{}"), &()).await else {
            panic!("text/plain must be rejected");
        };
        assert_eq!(err.status(), http::StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let Err(err) = JsonPayload::<Probe>::from_request(request(None, "{}"), &()).await else {
            panic!("missing content type must be rejected");
        };
        assert_eq!(err.body().code, "unsupported_content_type");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let Err(err) = JsonPayload::<Probe>::from_request(request(Some("application/json"), "{not json"), &()).await
        else {
            panic!("malformed body must be rejected");
        };

        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(err.body().code, "validation_error");
    }
}
