//! Prometheus metrics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::error_handling::AttemptFailure;
use crate::resolver::Tier;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;

    let mut metrics = format!(
        r#"# HELP real_address_requests_total Generate requests received
# TYPE real_address_requests_total counter
real_address_requests_total {}

# HELP real_address_succeeded_total Generate requests answered with a profile
# TYPE real_address_succeeded_total counter
real_address_succeeded_total {}

# HELP real_address_failed_total Generate requests answered with an error
# TYPE real_address_failed_total counter
real_address_failed_total {}

# HELP real_address_uptime_seconds Seconds since the server started
# TYPE real_address_uptime_seconds gauge
real_address_uptime_seconds {}

# HELP real_address_tier_hits_total Addresses resolved per fallback tier
# TYPE real_address_tier_hits_total counter
"#,
        stats.requests(),
        stats.succeeded(),
        stats.failed(),
        state.start_time.elapsed().as_secs_f64(),
    );

    for tier in Tier::iter() {
        metrics.push_str(&format!(
            "real_address_tier_hits_total{{tier=\"{}\"}} {}\n",
            tier.as_str(),
            stats.tier_hits(tier)
        ));
    }

    metrics.push_str(
        "\n# HELP real_address_geocoder_failures_total Failed geocoder attempts by kind\n\
         # TYPE real_address_geocoder_failures_total counter\n",
    );
    for kind in AttemptFailure::iter() {
        metrics.push_str(&format!(
            "real_address_geocoder_failures_total{{kind=\"{}\"}} {}\n",
            kind.as_str(),
            stats.attempt_failures(kind)
        ));
    }

    (StatusCode::OK, metrics).into_response()
}
