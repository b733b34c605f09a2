//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client (identifying User-Agent and timeout)
//! - Geocoder rate limiter
//! - Country table, resolver and generator
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::country::CountryNormalizer;
use crate::error_handling::{InitializationError, ResolutionStats, RetryPolicy};
use crate::generator::AddressGenerator;
use crate::geocode::GeocodeClient;
use crate::persona::{LocalPersonaGenerator, PersonaSource};
use crate::rate_limiter::RateLimiter;
use crate::resolver::AddressResolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the geocoder rate limiter.
///
/// One limiter is created per process and shared by every request, so the
/// minimum interval holds across concurrent handlers.
pub fn init_rate_limiter(config: &Config) -> Arc<RateLimiter> {
    Arc::new(RateLimiter::new(config.min_interval()))
}

/// Builds the generator with the local persona source.
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` for an invalid configuration and
/// `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_generator(
    config: &Config,
    stats: Arc<ResolutionStats>,
) -> Result<AddressGenerator, InitializationError> {
    init_generator_with(config, stats, Arc::new(LocalPersonaGenerator))
}

/// Builds the generator around a caller-supplied persona source.
///
/// # Errors
///
/// Same as [`init_generator`].
pub fn init_generator_with(
    config: &Config,
    stats: Arc<ResolutionStats>,
    persona: Arc<dyn PersonaSource>,
) -> Result<AddressGenerator, InitializationError> {
    config.validate()?;

    let http = init_client(config)?;
    let limiter = init_rate_limiter(config);
    let client = GeocodeClient::new(
        http,
        config.geocoder_base_url()?,
        limiter,
        config.accept_language.clone(),
        config.contact_email.clone(),
    );
    let resolver = AddressResolver::new(
        client,
        RetryPolicy::from_config(config),
        config.country_only_limit,
        Arc::clone(&stats),
    );
    let normalizer = Arc::new(CountryNormalizer::new());
    log::debug!("Loaded {} countries", normalizer.len());

    Ok(AddressGenerator::new(normalizer, resolver, persona, stats))
}
