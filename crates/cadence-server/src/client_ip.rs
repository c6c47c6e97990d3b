use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Address used to key per-client rate limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

impl ClientAddr {
    pub const UNKNOWN: &'static str = "unknown";
}

/// Middleware that resolves the client address once per request
///
/// Stores a [`ClientAddr`] in request extensions for the rate limiters.
pub async fn client_addr_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let addr = resolve(&request, state.trusted_hops());
    request.extensions_mut().insert(ClientAddr(addr));

    next.run(request).await
}

fn resolve(request: &Request, trusted_hops: Option<usize>) -> String {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    trusted_hops
        .and_then(|hops| forwarded_for(request.headers(), hops))
        .or(peer)
        .unwrap_or_else(|| ClientAddr::UNKNOWN.to_owned())
}

/// Pick the entry `hops` positions from the right of `X-Forwarded-For`
///
/// With one trusted proxy the right-most entry is the address that proxy saw.
fn forwarded_for(headers: &http::HeaderMap, hops: usize) -> Option<String> {
    if hops == 0 {
        return None;
    }

    let entries: Vec<&str> = headers
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    entries
        .len()
        .checked_sub(hops)
        .and_then(|index| entries.get(index))
        .map(|entry| (*entry).to_owned())
}
