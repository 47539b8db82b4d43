//! Per-identity sliding-window rate limiting.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Bucket used when the caller has no identity.
pub const DEFAULT_IDENTITY: &str = "default";

/// Approximate sliding-window limiter. Buckets are pruned on every check
/// but never removed, so memory grows with the number of identities.
pub struct RateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            limit,
            window,
        }
    }

    /// Record a request for `identity` unless it is over the limit.
    pub fn allow(&self, identity: Option<&str>) -> bool {
        self.allow_at(identity, Instant::now())
    }

    /// `allow` with an explicit clock reading.
    pub fn allow_at(&self, identity: Option<&str>, now: Instant) -> bool {
        let identity = identity.unwrap_or(DEFAULT_IDENTITY);
        let mut windows = self.windows.lock();
        let entries = windows.entry(identity.to_string()).or_default();

        while let Some(oldest) = entries.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                entries.pop_front();
            } else {
                break;
            }
        }

        if entries.len() >= self.limit {
            return false;
        }

        entries.push_back(now);
        true
    }

    /// Number of identities with a bucket.
    pub fn tracked_identities(&self) -> usize {
        self.windows.lock().len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
