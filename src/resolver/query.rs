//! Resolution input.

use serde::Deserialize;

/// User input for one resolution: the country is required, the rest are
/// hints that may be dropped by the fallback tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressQuery {
    #[serde(rename = "country")]
    pub country_raw: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl AddressQuery {
    pub fn new(country: impl Into<String>) -> Self {
        AddressQuery {
            country_raw: country.into(),
            ..Default::default()
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}
