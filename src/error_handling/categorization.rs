//! Error categorization and retry strategy.
//!
//! This module classifies geocoder failures into the retryable and
//! non-retryable classes and builds the backoff schedule for retries.

use std::time::Duration;

use reqwest::StatusCode;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::GeocodeError;
use crate::config::{Config, HTTP_STATUS_TOO_MANY_REQUESTS};

/// Bounded exponential backoff for transient geocoder failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per tier, initial attempt included
    pub max_attempts: usize,
    /// Delay before the first retry; doubled for every further retry
    pub base_delay: Duration,
    /// Upper bound for a single delay
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        RetryPolicy {
            max_attempts: config.retry_max_attempts,
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
            max_delay: Duration::from_millis(config.retry_max_delay_ms),
        }
    }

    /// Creates the retry schedule for one tier.
    ///
    /// `ExponentialBackoff::from_millis(2)` yields 2, 4, 8, ... which the
    /// factor scales so the first delay equals `base_delay`. The iterator is
    /// limited to `max_attempts - 1` delays because `tokio_retry` makes one
    /// attempt before consuming the first delay.
    pub fn strategy(&self) -> impl Iterator<Item = Duration> {
        let factor = (self.base_delay.as_millis() / 2).max(1) as u64;
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(self.max_delay)
            .take(self.max_attempts.saturating_sub(1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::from_config(&Config::default())
    }
}

/// Classifies a non-success HTTP status returned by the geocoder.
///
/// Returns `None` for 2xx statuses.
pub fn classify_status(status: StatusCode) -> Option<GeocodeError> {
    if status.is_success() {
        return None;
    }
    let code = status.as_u16();
    if code == HTTP_STATUS_TOO_MANY_REQUESTS || status.is_server_error() {
        Some(GeocodeError::Transient(format!("geocoder returned HTTP {code}")))
    } else {
        Some(GeocodeError::Fatal(format!("geocoder returned HTTP {code}")))
    }
}

/// Classifies a `reqwest::Error` into the geocoder taxonomy.
///
/// Network-level failures (timeouts, refused connections, interrupted
/// requests or bodies) are transient. Builder, redirect and decode failures
/// are a property of the request or the response and will not improve on retry.
pub fn classify_reqwest_error(error: &reqwest::Error) -> GeocodeError {
    if let Some(status) = error.status() {
        if let Some(classified) = classify_status(status) {
            return classified;
        }
    }

    if error.is_timeout() {
        GeocodeError::Transient(format!("geocoder request timed out: {error}"))
    } else if error.is_connect() {
        GeocodeError::Transient(format!("could not connect to geocoder: {error}"))
    } else if error.is_builder() || error.is_redirect() || error.is_decode() {
        GeocodeError::Fatal(format!("geocoder request failed: {error}"))
    } else {
        GeocodeError::Transient(format!("geocoder request failed: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max_attempts: usize, base_ms: u64, max_ms: u64) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(base_ms),
            max_delay: Duration::from_millis(max_ms),
        }
    }

    #[test]
    fn test_default_strategy_delays() {
        let delays: Vec<Duration> = RetryPolicy::default().strategy().collect();
        // 3 attempts = 2 retries: 2s then 4s
        assert_eq!(
            delays,
            vec![Duration::from_secs(2), Duration::from_secs(4)]
        );
    }

    #[test]
    fn test_strategy_is_capped() {
        let delays: Vec<Duration> = policy(6, 2000, 10_000).strategy().collect();
        assert_eq!(delays.len(), 5);
        assert_eq!(delays[0], Duration::from_secs(2));
        assert_eq!(delays[1], Duration::from_secs(4));
        assert_eq!(delays[2], Duration::from_secs(8));
        assert!(delays[3..].iter().all(|d| *d == Duration::from_secs(10)));
    }

    #[test]
    fn test_single_attempt_means_no_retries() {
        assert_eq!(policy(1, 2000, 10_000).strategy().count(), 0);
    }

    #[test]
    fn test_classify_status_transient() {
        for code in [429u16, 500, 502, 503, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = classify_status(status).expect("non-success must classify");
            assert!(err.is_transient(), "HTTP {code} should be transient");
        }
    }

    #[test]
    fn test_classify_status_fatal() {
        for code in [400u16, 401, 403, 404, 418, 301] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = classify_status(status).expect("non-success must classify");
            assert!(
                matches!(err, GeocodeError::Fatal(_)),
                "HTTP {code} should be fatal"
            );
        }
    }

    #[test]
    fn test_classify_status_success() {
        assert!(classify_status(StatusCode::OK).is_none());
    }

    #[tokio::test]
    async fn test_classify_connection_refused_is_transient() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::new()
            .get(format!("http://{addr}/search"))
            .send()
            .await
            .expect_err("nothing listens on the port");
        assert!(classify_reqwest_error(&err).is_transient());
    }
}
