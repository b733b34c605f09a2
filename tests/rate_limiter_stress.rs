//! Concurrency tests for the shared geocoder rate limiter.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use real_address::RateLimiter;
use tokio::time::Instant;

#[tokio::test]
async fn test_concurrent_acquires_are_spaced() {
    let interval = Duration::from_millis(40);
    let limiter = Arc::new(RateLimiter::new(interval));

    let tasks = (0..8).map(|_| {
        let limiter = Arc::clone(&limiter);
        tokio::spawn(async move { limiter.acquire().await })
    });
    let mut releases: Vec<Instant> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.expect("acquire task panicked"))
        .collect();
    releases.sort();

    for pair in releases.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= interval, "gap {:?} is shorter than {:?}", gap, interval);
    }
}

#[tokio::test]
async fn test_total_time_grows_with_callers() {
    let interval = Duration::from_millis(25);
    let limiter = Arc::new(RateLimiter::new(interval));
    let start = Instant::now();

    let tasks = (0..5).map(|_| {
        let limiter = Arc::clone(&limiter);
        tokio::spawn(async move { limiter.acquire().await })
    });
    for result in join_all(tasks).await {
        result.expect("acquire task panicked");
    }

    // The first caller goes immediately, the other four wait one interval each.
    assert!(start.elapsed() >= interval * 4);
}

#[tokio::test]
async fn test_unlimited_limiter_does_not_wait() {
    let limiter = Arc::new(RateLimiter::new(Duration::ZERO));
    let start = Instant::now();

    let tasks = (0..50).map(|_| {
        let limiter = Arc::clone(&limiter);
        tokio::spawn(async move { limiter.acquire().await })
    });
    for result in join_all(tasks).await {
        result.expect("acquire task panicked");
    }

    assert!(start.elapsed() < Duration::from_secs(1));
}
