//! Adaptive address resolution.
//!
//! The country is authoritative; city, zipcode and state are hints. The
//! resolver walks the planned tiers in order and stops at the first verified
//! address:
//!
//! 1. `FullPrecision` - every supplied hint
//! 2. `DropZipcode` - city + state
//! 3. `DropState` - city only
//! 4. `DropCity` - zipcode only
//! 5. `CountryOnly` - anywhere in the country, random pick
//!
//! Transient failures are retried inside a tier with exponential backoff;
//! not-found and fatal outcomes move on to the next tier immediately. If
//! every tier fails the resolution fails; no placeholder address is ever
//! produced.

mod query;
mod tiers;

use std::sync::Arc;

use rand::seq::IndexedRandom;
use tokio_retry::RetryIf;

use crate::config::SEARCH_KEYWORDS;
use crate::country::NormalizedCountry;
use crate::error_handling::{GeocodeError, ResolutionStats, ResolveError, RetryPolicy};
use crate::geocode::{CandidatePick, GeocodeClient, GeocodeRequest, QueryKind, ResolvedAddress};

pub use query::AddressQuery;
pub use tiers::{plan_tiers, Hints, PlannedTier, Tier};

/// A verified address and the tier that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub address: ResolvedAddress,
    pub tier: Tier,
}

/// Runs the fallback state machine against a `GeocodeClient`.
pub struct AddressResolver {
    client: GeocodeClient,
    retry: RetryPolicy,
    country_only_limit: u8,
    stats: Arc<ResolutionStats>,
}

impl AddressResolver {
    pub fn new(
        client: GeocodeClient,
        retry: RetryPolicy,
        country_only_limit: u8,
        stats: Arc<ResolutionStats>,
    ) -> Self {
        AddressResolver {
            client,
            retry,
            country_only_limit,
            stats,
        }
    }

    /// Resolves one query within `country`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NoAddressFound` when every tier ends in
    /// not-found, a fatal failure, or exhausted transient retries.
    pub async fn resolve(
        &self,
        query: &AddressQuery,
        country: &NormalizedCountry,
    ) -> Result<Resolution, ResolveError> {
        for planned in plan_tiers(query) {
            let request = self.build_request(&planned, country);
            log::info!(
                "Resolving address for {} at tier {}",
                country,
                planned.tier.as_str()
            );

            match self.attempt(&request).await {
                Ok(address) => {
                    let address = self.refine_street(address, country).await;
                    self.stats.record_tier_hit(planned.tier);
                    log::info!(
                        "Resolved address for {} at tier {}: {}",
                        country,
                        planned.tier.as_str(),
                        address.full_display_address
                    );
                    return Ok(Resolution {
                        address,
                        tier: planned.tier,
                    });
                }
                Err(GeocodeError::NotFound) => {
                    log::debug!(
                        "No candidates for {} at tier {}",
                        country,
                        planned.tier.as_str()
                    );
                }
                Err(e) => {
                    log::warn!(
                        "Tier {} failed for {}: {}",
                        planned.tier.as_str(),
                        country,
                        e
                    );
                }
            }
        }

        log::warn!("All fallback tiers exhausted for {}", country);
        Err(ResolveError::NoAddressFound {
            country: country.code.to_string(),
        })
    }

    fn build_request(&self, planned: &PlannedTier, country: &NormalizedCountry) -> GeocodeRequest {
        let keyword = SEARCH_KEYWORDS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("hotel")
            .to_string();

        match &planned.hints {
            Some(hints) => GeocodeRequest {
                country: *country,
                kind: QueryKind::Structured {
                    amenity: keyword,
                    city: hints.city.clone(),
                    postalcode: hints.zipcode.clone(),
                    state: hints.state.clone(),
                },
                limit: 1,
                pick: CandidatePick::First,
            },
            None => GeocodeRequest {
                country: *country,
                kind: QueryKind::FreeText { q: keyword },
                limit: self.country_only_limit,
                pick: CandidatePick::Random,
            },
        }
    }

    /// One tier: the query plus retries of transient failures.
    async fn attempt(&self, request: &GeocodeRequest) -> Result<ResolvedAddress, GeocodeError> {
        let client = &self.client;
        let stats = &self.stats;

        RetryIf::spawn(
            self.retry.strategy(),
            move || async move {
                let result = client.query(request).await;
                if let Err(e) = &result {
                    stats.record_attempt_failure(e.kind());
                    if e.is_transient() {
                        log::debug!("Transient geocoder failure, may retry: {}", e);
                    }
                }
                result
            },
            |e: &GeocodeError| e.is_transient(),
        )
        .await
    }

    /// Upgrades a POI-only record to a street-level one with a reverse lookup.
    ///
    /// Best effort: any failure keeps the original record, and so does a
    /// reverse result the service places in another country.
    async fn refine_street(
        &self,
        address: ResolvedAddress,
        country: &NormalizedCountry,
    ) -> ResolvedAddress {
        if address.has_street {
            return address;
        }

        match self
            .client
            .reverse(address.latitude, address.longitude, country)
            .await
        {
            Ok(refined) if !in_country(&refined, country) => {
                log::debug!(
                    "Street refinement skipped: reverse result lies in '{}', not {}",
                    refined.country_code.as_deref().unwrap_or_default(),
                    country.code
                );
                address
            }
            Ok(refined) if refined.has_street => {
                log::debug!(
                    "Refined '{}' to street address '{}'",
                    address.street_address,
                    refined.street_address
                );
                refined
            }
            Ok(_) => address,
            Err(e) => {
                self.stats.record_attempt_failure(e.kind());
                log::debug!("Street refinement skipped: {}", e);
                address
            }
        }
    }
}

/// Whether a record belongs to `country`. Records without a reported code
/// are accepted.
fn in_country(address: &ResolvedAddress, country: &NormalizedCountry) -> bool {
    address
        .country_code
        .as_deref()
        .map_or(true, |code| code.eq_ignore_ascii_case(country.code))
}
