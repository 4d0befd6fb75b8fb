//! Client-side rate limiting for API actions.
//!
//! Each action name gets its own token bucket so a burst of deletes for one
//! resource kind cannot starve describes for another. Callers that exceed the
//! refill rate are delayed, never rejected.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::config;

#[derive(Debug, Clone, Copy)]
struct Bucket {
    tokens: f64,
    last: Instant,
}

impl Bucket {
    fn new(burst: f64, now: Instant) -> Self {
        Bucket { tokens: burst, last: now }
    }

    /// Take one token, refilling for the time elapsed since the last call.
    /// Returns how long the caller must wait before proceeding; the token
    /// count may go negative to account for callers already queued.
    fn reserve(&mut self, now: Instant, rate: f64, burst: f64) -> Duration {
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.tokens = (self.tokens + elapsed * rate).min(burst);
        self.last = now;
        self.tokens -= 1.0;
        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(-self.tokens / rate)
        }
    }
}

/// Token bucket limiter keyed by API action name.
pub struct ActionLimiter {
    rate: f64,
    burst: f64,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl ActionLimiter {
    pub fn new(rate: f64, burst: f64) -> Self {
        ActionLimiter {
            rate,
            burst,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Wait until the bucket for `action` allows one more request.
    pub async fn check(&self, action: &str) {
        let delay = {
            let mut buckets = self.buckets.lock().await;
            let now = Instant::now();
            let bucket = buckets
                .entry(action.to_string())
                .or_insert_with(|| Bucket::new(self.burst, now));
            bucket.reserve(now, self.rate, self.burst)
        };
        if !delay.is_zero() {
            log::debug!("Rate limit reached for {}, waiting {:?}", action, delay);
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for ActionLimiter {
    fn default() -> Self {
        ActionLimiter::new(
            config::ratelimit::DEFAULT_RATE,
            config::ratelimit::DEFAULT_BURST,
        )
    }
}
