//! Error type definitions.
//!
//! This module defines all error types used throughout the application, from
//! startup failures to the per-attempt geocoder taxonomy.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Invalid configuration values, detected once at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the geocoder User-Agent must identify the application and must not be blank")]
    MissingUserAgent,

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidGeocoderUrl { url: String, reason: String },

    #[error("geocoder timeout must be at least one second")]
    ZeroTimeout,

    #[error("retry_max_attempts must be at least 1")]
    ZeroRetryAttempts,

    #[error("retry_base_delay_ms must be at least 2ms (got {0}ms)")]
    RetryDelayTooSmall(u64),

    #[error("retry_max_delay_ms ({max_ms}ms) is smaller than retry_base_delay_ms ({base_ms}ms)")]
    RetryDelayBounds { base_ms: u64, max_ms: u64 },

    #[error("country_only_limit must be between 1 and 50 (got {0})")]
    CandidateLimit(u8),
}

/// Outcome of a single geocoder query that did not produce an address.
///
/// `NotFound` is an expected outcome that drives the fallback tiers rather
/// than a failure. Every transport or HTTP failure is classified as either
/// `Transient` (eligible for retry) or `Fatal` before it leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// The service answered successfully with no usable candidate.
    #[error("geocoder returned no candidates")]
    NotFound,

    /// Timeouts, connection failures, 429 and 5xx responses.
    #[error("transient geocoder failure: {0}")]
    Transient(String),

    /// Malformed responses and 4xx responses other than 429.
    #[error("fatal geocoder failure: {0}")]
    Fatal(String),
}

impl GeocodeError {
    /// Whether the failure may succeed when retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, GeocodeError::Transient(_))
    }

    pub fn kind(&self) -> AttemptFailure {
        match self {
            GeocodeError::NotFound => AttemptFailure::NotFound,
            GeocodeError::Transient(_) => AttemptFailure::Transient,
            GeocodeError::Fatal(_) => AttemptFailure::Fatal,
        }
    }
}

/// Categories of failed geocoder attempts, used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum AttemptFailure {
    NotFound,
    Transient,
    Fatal,
}

impl AttemptFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptFailure::NotFound => "not_found",
            AttemptFailure::Transient => "transient",
            AttemptFailure::Fatal => "fatal",
        }
    }
}

/// The country input could not be mapped to a known country.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unrecognized country '{0}'")]
    Unresolvable(String),
}

/// Terminal outcome of the address resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every fallback tier was exhausted without a verified address.
    #[error("no address found for country {country}")]
    NoAddressFound { country: String },
}

/// The persona capability could not produce a persona.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("persona generator unavailable: {0}")]
pub struct PersonaUnavailable(pub String);

/// Errors that reach the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Country(#[from] NormalizeError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Persona(#[from] PersonaUnavailable),
}
