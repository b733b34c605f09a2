//! Final profile assembly.

use serde::{Deserialize, Serialize};

use crate::geocode::ResolvedAddress;
use crate::persona::Persona;

/// The response body of `/api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProfile {
    pub name: String,
    pub phone: String,
    /// Street line
    pub address: String,
    /// "City, Region", either part omitted when unknown
    pub city_state: String,
    pub zipcode: Option<String>,
    pub country: String,
    pub full_address: String,
    pub map_url: String,
}

/// Combines a verified address with a persona. No I/O, no failure modes.
pub fn assemble(address: ResolvedAddress, persona: Persona) -> GeneratedProfile {
    let city_state = [address.city.as_deref(), address.state_or_region.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    GeneratedProfile {
        name: persona.name,
        phone: persona.phone,
        address: address.street_address,
        city_state,
        zipcode: address.zipcode,
        country: address.country_display_name,
        full_address: address.full_display_address,
        map_url: address.map_url,
    }
}
