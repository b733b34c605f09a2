// Shared test helpers for building a resolver against a mock geocoder.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use httptest::Server;
use serde_json::{json, Value};

use real_address::initialization::{init_client, init_rate_limiter};
use real_address::{
    AddressResolver, Config, GeocodeClient, NormalizedCountry, ResolutionStats, RetryPolicy,
};

#[allow(dead_code)] // Used by other test files
pub const US: NormalizedCountry = NormalizedCountry {
    code: "US",
    name: "United States",
};

/// Configuration pointing at the mock server, with no rate limiting and
/// millisecond retry delays so tests stay fast.
#[allow(dead_code)] // Used by other test files
pub fn test_config(server: &Server) -> Config {
    Config {
        geocoder_url: server.url("/").to_string(),
        min_interval_ms: 0,
        timeout_seconds: 5,
        retry_max_attempts: 3,
        retry_base_delay_ms: 2,
        retry_max_delay_ms: 10,
        ..Default::default()
    }
}

#[allow(dead_code)] // Used by other test files
pub fn test_client_with(config: &Config) -> GeocodeClient {
    GeocodeClient::new(
        init_client(config).expect("Failed to build HTTP client"),
        config.geocoder_base_url().expect("Invalid mock server URL"),
        init_rate_limiter(config),
        config.accept_language.clone(),
        config.contact_email.clone(),
    )
}

#[allow(dead_code)] // Used by other test files
pub fn test_client(server: &Server) -> GeocodeClient {
    test_client_with(&test_config(server))
}

#[allow(dead_code)] // Used by other test files
pub fn test_resolver(server: &Server) -> (AddressResolver, Arc<ResolutionStats>) {
    let config = test_config(server);
    let stats = Arc::new(ResolutionStats::new());
    let resolver = AddressResolver::new(
        test_client_with(&config),
        RetryPolicy::from_config(&config),
        config.country_only_limit,
        Arc::clone(&stats),
    );
    (resolver, stats)
}

/// A street-level Nominatim `jsonv2` candidate.
#[allow(dead_code)] // Used by other test files
pub fn street_candidate(
    house_number: &str,
    road: &str,
    city: &str,
    state: &str,
    postcode: &str,
    country: &str,
) -> Value {
    json!({
        "place_id": 1,
        "lat": "40.7128",
        "lon": "-74.0060",
        "name": "",
        "display_name": format!("{house_number}, {road}, {city}, {state}, {postcode}, {country}"),
        "address": {
            "house_number": house_number,
            "road": road,
            "city": city,
            "state": state,
            "postcode": postcode,
            "country": country,
        }
    })
}
