//! The generate operation: normalize, resolve, persona, assemble.

use std::sync::Arc;

use crate::assemble::{assemble, GeneratedProfile};
use crate::country::CountryNormalizer;
use crate::error_handling::{GenerateError, ResolutionStats};
use crate::persona::PersonaSource;
use crate::resolver::{AddressQuery, AddressResolver};

/// Produces complete profiles for inbound requests.
///
/// Cheap to share behind an `Arc`; all request state lives on the stack of
/// `generate`.
pub struct AddressGenerator {
    normalizer: Arc<CountryNormalizer>,
    resolver: AddressResolver,
    persona: Arc<dyn PersonaSource>,
    stats: Arc<ResolutionStats>,
}

impl AddressGenerator {
    pub fn new(
        normalizer: Arc<CountryNormalizer>,
        resolver: AddressResolver,
        persona: Arc<dyn PersonaSource>,
        stats: Arc<ResolutionStats>,
    ) -> Self {
        AddressGenerator {
            normalizer,
            resolver,
            persona,
            stats,
        }
    }

    /// Generates one profile.
    ///
    /// # Errors
    ///
    /// - `GenerateError::Country` when the country cannot be normalized
    /// - `GenerateError::Resolve` when every fallback tier failed
    /// - `GenerateError::Persona` when the persona source failed
    pub async fn generate(&self, query: &AddressQuery) -> Result<GeneratedProfile, GenerateError> {
        self.stats.record_request();

        let country = self.normalizer.normalize(&query.country_raw).map_err(|e| {
            self.stats.record_unresolvable_country();
            log::info!("Rejected request: {}", e);
            e
        })?;

        let resolution = self.resolver.resolve(query, &country).await.map_err(|e| {
            self.stats.record_no_address_found();
            e
        })?;

        let persona = self.persona.persona(country.code).map_err(|e| {
            self.stats.record_persona_unavailable();
            log::error!("{}", e);
            e
        })?;

        self.stats.record_success();
        Ok(assemble(resolution.address, persona))
    }
}
