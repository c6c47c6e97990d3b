use cadence_config::{RateLimitConfig, RequestRateLimit};

use crate::{
    error::{LimitScope, RateLimitError},
    limiter::KeyedLimiter,
};

/// The two independent limiters guarding the API
///
/// Constructed once at startup and composed per route by the server: the
/// general limiter wraps every `/api` route, the audio limiter only the
/// audio generation route. Neither consumes the other's budget.
#[derive(Clone)]
pub struct RateLimiters {
    pub general: KeyedLimiter,
    pub audio: KeyedLimiter,
}

impl RateLimiters {
    /// Create both limiters from configuration
    pub fn from_config(config: &RateLimitConfig) -> Result<Self, RateLimitError> {
        Ok(Self {
            general: build_limiter(LimitScope::General, &config.general)?,
            audio: build_limiter(LimitScope::Audio, &config.audio)?,
        })
    }

    /// Drop idle client state from both limiters
    pub fn prune(&self) {
        self.general.prune();
        self.audio.prune();
    }
}

fn build_limiter(scope: LimitScope, limit: &RequestRateLimit) -> Result<KeyedLimiter, RateLimitError> {
    let window = cadence_config::parse_duration("rate limit window", &limit.window)
        .map_err(|e| RateLimitError::Config(e.to_string()))?;

    tracing::debug!(?scope, requests = limit.requests, ?window, "building rate limiter");

    KeyedLimiter::new(scope, limit.requests, window)
}
