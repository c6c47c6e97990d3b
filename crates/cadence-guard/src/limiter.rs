use std::{
    collections::VecDeque,
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;

use crate::error::{LimitScope, RateLimitError};

/// In-memory sliding-window rate limiter keyed by client address
///
/// Each client keeps a log of the instants its admitted requests arrived.
/// A request is admitted only while fewer than `max_requests` of those fall
/// inside the trailing `window`. Rejected requests are not logged.
#[derive(Clone)]
pub struct KeyedLimiter {
    clients: Arc<DashMap<String, VecDeque<Instant>>>,
    max_requests: usize,
    window: Duration,
    scope: LimitScope,
}

impl KeyedLimiter {
    /// Create a limiter admitting `max_requests` per rolling `window`
    pub fn new(scope: LimitScope, max_requests: u32, window: Duration) -> Result<Self, RateLimitError> {
        if max_requests == 0 {
            return Err(RateLimitError::Config("max_requests must be > 0".to_string()));
        }

        if window.is_zero() {
            return Err(RateLimitError::Config("rate limit window must be > 0".to_string()));
        }

        let max_requests = usize::try_from(max_requests)
            .map_err(|_| RateLimitError::Config("max_requests out of range".to_string()))?;

        Ok(Self {
            clients: Arc::new(DashMap::new()),
            max_requests,
            window,
            scope,
        })
    }

    /// Which limiter this is
    pub const fn scope(&self) -> LimitScope {
        self.scope
    }

    /// Consume one permit for `key`, returning whether the request may proceed
    pub fn try_acquire(&self, key: &str) -> bool {
        self.check(key).is_ok()
    }

    /// Consume one permit for `key`, reporting when to retry on rejection
    pub fn check(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut log = self.clients.entry(key.to_owned()).or_default();

        while log.front().is_some_and(|&at| now.duration_since(at) >= self.window) {
            log.pop_front();
        }

        if log.len() < self.max_requests {
            log.push_back(now);
            return Ok(());
        }

        // The oldest logged request frees the next slot when it leaves the window
        let wait = log
            .front()
            .map_or(self.window, |&oldest| self.window.saturating_sub(now.duration_since(oldest)));

        Err(RateLimitError::Exceeded {
            scope: self.scope,
            retry_after: ceil_secs(wait).max(1),
        })
    }

    /// Drop state for clients with no request inside the window
    pub fn prune(&self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&self, now: Instant) {
        self.clients
            .retain(|_, log| log.back().is_some_and(|&at| now.duration_since(at) < self.window));
        self.clients.shrink_to_fit();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}
