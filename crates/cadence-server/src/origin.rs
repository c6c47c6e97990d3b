use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::state::AppState;

/// The `scheme://host` the client used to reach this server
///
/// Voice URLs are built from it so they resolve for whoever asked.
/// `X-Forwarded-Proto` is honoured only behind trusted proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(origin_of(parts, state.trusted_hops().is_some_and(|hops| hops > 0))))
    }
}

fn origin_of(parts: &Parts, trust_proxy: bool) -> String {
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    let scheme = trust_proxy
        .then(|| header("x-forwarded-proto"))
        .flatten()
        .or_else(|| parts.uri.scheme_str())
        .unwrap_or("http");

    let host = header(http::header::HOST.as_str())
        .or_else(|| parts.uri.authority().map(http::uri::Authority::as_str))
        .unwrap_or("localhost");

    format!("{scheme}://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = http::Request::get("/api/preset-voices");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn host_header_with_plain_http() {
        let parts = parts(&[("host", "localhost:3001")]);
        assert_eq!(origin_of(&parts, false), "http://localhost:3001");
    }

    #[test]
    fn forwarded_proto_needs_trust() {
        let parts = parts(&[("host", "voices.example.com"), ("x-forwarded-proto", "https")]);

        assert_eq!(origin_of(&parts, false), "http://voices.example.com");
        assert_eq!(origin_of(&parts, true), "https://voices.example.com");
    }
}
