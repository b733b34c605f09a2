//! Minimum-interval rate limiting for the shared geocoding service.
//!
//! The public Nominatim instance allows at most one request per second from
//! an application, across all of its concurrent users. A single
//! `RateLimiter` is created at startup and handed to every geocoder client,
//! making it the one serialization point for outbound traffic.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Serializes callers so that consecutive releases are at least
/// `min_interval` apart.
///
/// The elapsed-time check, the wait and the timestamp update all happen while
/// the lock is held. Waiters queue on the tokio mutex, which is fair, so
/// callers are released in arrival order.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        RateLimiter {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Waits for the next free slot and claims it.
    ///
    /// Returns the instant recorded for this caller. A caller dropped while
    /// waiting records nothing; once `acquire` has returned the slot is
    /// accounted for, even if the caller then abandons its request.
    pub async fn acquire(&self) -> Instant {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let ready_at = previous + self.min_interval;
            if Instant::now() < ready_at {
                log::trace!(
                    "Rate limiter: waiting {:?} before next geocoder request",
                    ready_at - Instant::now()
                );
                sleep_until(ready_at).await;
            }
        }

        let now = Instant::now();
        *last_request = Some(now);
        now
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
