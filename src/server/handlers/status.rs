//! JSON status and health handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum::IntoEnumIterator;

use super::super::types::{AppState, FailureCounts, StatusResponse};
use crate::error_handling::AttemptFailure;
use crate::resolver::Tier;

/// Liveness probe
pub async fn health_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// JSON status endpoint with resolution statistics
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let succeeded = stats.succeeded();
    let elapsed = state.start_time.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        succeeded as f64 / elapsed
    } else {
        0.0
    };

    let response = StatusResponse {
        requests: stats.requests(),
        succeeded,
        failed: stats.failed(),
        elapsed_seconds: elapsed,
        rate_per_second: rate,
        failures: FailureCounts {
            unresolvable_country: stats.unresolvable_country(),
            no_address_found: stats.no_address_found(),
            persona_unavailable: stats.persona_unavailable(),
        },
        tier_hits: Tier::iter()
            .map(|tier| (tier.as_str(), stats.tier_hits(tier)))
            .collect(),
        attempt_failures: AttemptFailure::iter()
            .map(|kind| (kind.as_str(), stats.attempt_failures(kind)))
            .collect(),
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
