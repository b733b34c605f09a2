//! HTTP client initialization.
//!
//! This module builds the single outbound client shared by every geocoder
//! request.

use std::sync::Arc;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for geocoder calls.
///
/// Creates a `reqwest::Client` configured with:
/// - the identifying User-Agent from the configuration
/// - the per-request timeout from the configuration
///
/// # Arguments
///
/// * `config` - Service configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.trim().to_string())
        .build()?;
    Ok(Arc::new(client))
}
