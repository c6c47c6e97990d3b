use serde::Deserialize;

/// Configuration for deriving the client address used as the rate-limit key
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientIpConfig {
    /// Number of trusted reverse-proxy hops in `X-Forwarded-For`
    ///
    /// When unset, forwarding headers are ignored and the TCP peer address
    /// is used. This also controls whether `X-Forwarded-Proto` is honored
    /// when building public URLs.
    #[serde(default)]
    pub trusted_hops: Option<usize>,
}
