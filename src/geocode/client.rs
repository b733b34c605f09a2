//! Nominatim HTTP client.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use reqwest::header::FROM;
use url::Url;

use super::parse::parse_candidate;
use super::types::{CandidatePick, GeocodeRequest, RawCandidate, ResolvedAddress};
use crate::config::REVERSE_ZOOM_LEVEL;
use crate::country::NormalizedCountry;
use crate::error_handling::{classify_reqwest_error, classify_status, GeocodeError};
use crate::rate_limiter::RateLimiter;

/// Issues single search and reverse queries against a Nominatim-compatible
/// service.
///
/// Every network call first passes through the shared `RateLimiter`.
/// Each call makes exactly one HTTP request; retrying is left to the caller.
#[derive(Clone)]
pub struct GeocodeClient {
    http: Arc<reqwest::Client>,
    base_url: Url,
    limiter: Arc<RateLimiter>,
    accept_language: String,
    contact_email: Option<String>,
}

impl GeocodeClient {
    /// Creates a client.
    ///
    /// `http` should already carry the identifying User-Agent and the request
    /// timeout (see `initialization::init_client`).
    pub fn new(
        http: Arc<reqwest::Client>,
        base_url: Url,
        limiter: Arc<RateLimiter>,
        accept_language: impl Into<String>,
        contact_email: Option<String>,
    ) -> Self {
        let mut base_url = base_url;
        // Endpoints are joined relative to the base, which needs a trailing slash
        // to keep any path prefix (e.g. a reverse proxy mount point).
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        GeocodeClient {
            http,
            base_url,
            limiter,
            accept_language: accept_language.into(),
            contact_email,
        }
    }

    /// Runs one search and parses the selected candidate.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the service returns no candidate with address details
    /// - `Transient` for timeouts, connection failures, 429 and 5xx
    /// - `Fatal` for other 4xx statuses and malformed responses
    pub async fn query(&self, request: &GeocodeRequest) -> Result<ResolvedAddress, GeocodeError> {
        let mut params = request.query_pairs();
        params.extend(self.common_params());

        let body = self.get("search", &params).await?;
        let candidates: Vec<RawCandidate> = serde_json::from_slice(&body).map_err(|e| {
            GeocodeError::Fatal(format!("malformed geocoder search response: {e}"))
        })?;

        let usable: Vec<&RawCandidate> = candidates
            .iter()
            .filter(|c| c.address.as_ref().is_some_and(|a| !a.is_empty()))
            .collect();
        log::debug!(
            "Geocoder returned {} candidates ({} with address details) for {:?}",
            candidates.len(),
            usable.len(),
            request.kind
        );

        let picked = match request.pick {
            CandidatePick::First => usable.first().copied(),
            CandidatePick::Random => usable.choose(&mut rand::rng()).copied(),
        };
        match picked {
            Some(candidate) => parse_candidate(candidate, &request.country),
            None => Err(GeocodeError::NotFound),
        }
    }

    /// Looks up the street-level address at the given coordinates.
    ///
    /// Same error classification as `query`; a reverse miss (`{"error": ...}`)
    /// is `NotFound`.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
        country: &NormalizedCountry,
    ) -> Result<ResolvedAddress, GeocodeError> {
        let mut params = vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("zoom", REVERSE_ZOOM_LEVEL.to_string()),
        ];
        params.extend(self.common_params());

        let body = self.get("reverse", &params).await?;
        let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            GeocodeError::Fatal(format!("malformed geocoder reverse response: {e}"))
        })?;
        if value.get("error").is_some() {
            return Err(GeocodeError::NotFound);
        }

        let candidate: RawCandidate = serde_json::from_value(value).map_err(|e| {
            GeocodeError::Fatal(format!("malformed geocoder reverse response: {e}"))
        })?;
        if !candidate.address.as_ref().is_some_and(|a| !a.is_empty()) {
            return Err(GeocodeError::NotFound);
        }
        parse_candidate(&candidate, country)
    }

    fn common_params(&self) -> [(&'static str, String); 3] {
        [
            ("format", "jsonv2".to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", self.accept_language.clone()),
        ]
    }

    /// Sends one rate-limited GET and returns the body of a 2xx response.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<u8>, GeocodeError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| GeocodeError::Fatal(format!("invalid geocoder endpoint: {e}")))?;

        let mut builder = self.http.get(url).query(params);
        if let Some(email) = &self.contact_email {
            builder = builder.header(FROM, email);
        }

        self.limiter.acquire().await;
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        if let Some(error) = classify_status(response.status()) {
            log::warn!("Geocoder {} request failed: {}", endpoint, error);
            return Err(error);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        Ok(body.to_vec())
    }
}
