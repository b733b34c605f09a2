//! Server data structures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error_handling::{GenerateError, InitializationError, ResolutionStats};
use crate::generator::AddressGenerator;
use crate::initialization::init_generator;

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<AddressGenerator>,
    pub stats: Arc<ResolutionStats>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(generator: Arc<AddressGenerator>, stats: Arc<ResolutionStats>) -> Self {
        AppState {
            generator,
            stats,
            start_time: Arc::new(Instant::now()),
        }
    }

    /// Initializes every shared resource from the configuration.
    ///
    /// # Errors
    ///
    /// Propagates configuration and HTTP client initialization failures.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let stats = Arc::new(ResolutionStats::new());
        let generator = init_generator(config, Arc::clone(&stats))?;
        Ok(AppState::new(Arc::new(generator), stats))
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl GenerateError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::Country(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GenerateError::Resolve(_) | GenerateError::Persona(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.to_string())
    }
}

/// JSON response for `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub requests: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed_seconds: f64,
    pub rate_per_second: f64,
    pub failures: FailureCounts,
    pub tier_hits: BTreeMap<&'static str, usize>,
    pub attempt_failures: BTreeMap<&'static str, usize>,
}

#[derive(Serialize)]
pub struct FailureCounts {
    pub unresolvable_country: usize,
    pub no_address_found: usize,
    pub persona_unavailable: usize,
}
