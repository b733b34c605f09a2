//! Error handling and resolution statistics.
//!
//! This module provides:
//! - Error type definitions (startup, geocoder taxonomy, request boundary)
//! - Classification of HTTP failures into transient and fatal
//! - Retry strategy configuration
//! - Resolution statistics (tier hits, failed attempts, request outcomes)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{classify_reqwest_error, classify_status, RetryPolicy};
pub use stats::ResolutionStats;
pub use types::{
    AttemptFailure, ConfigError, GenerateError, GeocodeError, InitializationError,
    NormalizeError, PersonaUnavailable, ResolveError,
};
