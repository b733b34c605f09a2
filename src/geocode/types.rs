//! Geocoder request and result types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::country::NormalizedCountry;

/// How a candidate is chosen from a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePick {
    /// Trust the service's relevance ranking
    First,
    /// Pick pseudo-randomly to diversify repeated identical requests
    Random,
}

/// Search mode of a geocoder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Nominatim structured search. `amenity` steers results towards
    /// street-level points of interest inside the hinted locality.
    Structured {
        amenity: String,
        city: Option<String>,
        postalcode: Option<String>,
        state: Option<String>,
    },
    /// Free-text search, scoped to the country by `countrycodes`.
    FreeText { q: String },
}

/// Parameters of one geocoder search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    pub country: NormalizedCountry,
    pub kind: QueryKind,
    pub limit: u8,
    pub pick: CandidatePick,
}

impl GeocodeRequest {
    /// Query parameters specific to this request. Output format, detail
    /// level and language are added by the client.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(8);
        match &self.kind {
            QueryKind::Structured {
                amenity,
                city,
                postalcode,
                state,
            } => {
                pairs.push(("amenity", amenity.clone()));
                if let Some(city) = city {
                    pairs.push(("city", city.clone()));
                }
                if let Some(postalcode) = postalcode {
                    pairs.push(("postalcode", postalcode.clone()));
                }
                if let Some(state) = state {
                    pairs.push(("state", state.clone()));
                }
            }
            QueryKind::FreeText { q } => pairs.push(("q", q.clone())),
        }
        pairs.push(("countrycodes", self.country.geocoder_code()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// One ranked candidate as returned by Nominatim (`format=jsonv2`).
///
/// Coordinates arrive as strings; `address` is only present when
/// `addressdetails=1` was requested and the service had details.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<HashMap<String, String>>,
    pub lat: String,
    pub lon: String,
}

/// A verified, normalized postal address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAddress {
    pub street_address: String,
    pub city: Option<String>,
    pub state_or_region: Option<String>,
    pub zipcode: Option<String>,
    /// Always the display name of the country the search was scoped to
    pub country_display_name: String,
    pub full_display_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub map_url: String,
    /// Whether the street line came from a road rather than a POI name
    #[serde(skip)]
    pub has_street: bool,
    /// Lowercase ISO code the service reported for the record, if any
    #[serde(skip)]
    pub country_code: Option<String>,
}
