//! Parsing of raw geocoder candidates into `ResolvedAddress`.

use std::collections::HashMap;

use url::Url;

use super::types::{RawCandidate, ResolvedAddress};
use crate::config::MAP_LINK_ZOOM_LEVEL;
use crate::country::NormalizedCountry;
use crate::error_handling::GeocodeError;

const ROAD_KEYS: &[&str] = &["road", "pedestrian", "footway", "street"];
const POI_KEYS: &[&str] = &["amenity", "shop", "tourism", "building"];
const CITY_KEYS: &[&str] = &["city", "town", "village", "municipality", "county"];
const REGION_KEYS: &[&str] = &["state", "province", "region"];

/// Converts one raw candidate into a `ResolvedAddress`.
///
/// Fields come from the candidate only, so hints from the query never leak
/// into the result. The country display name is always taken from `country`,
/// whatever language or casing the service used.
///
/// # Errors
///
/// Returns `GeocodeError::Fatal` when the coordinates are not valid numbers.
pub fn parse_candidate(
    candidate: &RawCandidate,
    country: &NormalizedCountry,
) -> Result<ResolvedAddress, GeocodeError> {
    let latitude = parse_coordinate(&candidate.lat, -90.0..=90.0, "lat")?;
    let longitude = parse_coordinate(&candidate.lon, -180.0..=180.0, "lon")?;

    let empty = HashMap::new();
    let address = candidate.address.as_ref().unwrap_or(&empty);

    let road = first_of(address, ROAD_KEYS);
    let has_street = road.is_some();
    let street_address = match road {
        Some(road) => match first_of(address, &["house_number"]) {
            Some(number) => format!("{number} {road}"),
            None => road.to_string(),
        },
        None => first_of(address, POI_KEYS)
            .or_else(|| non_blank(candidate.name.as_deref()))
            .or_else(|| {
                candidate
                    .display_name
                    .as_deref()
                    .and_then(|d| d.split(',').next())
                    .and_then(|first| non_blank(Some(first.trim())))
            })
            .unwrap_or_default()
            .to_string(),
    };

    let city = first_of(address, CITY_KEYS).map(str::to_string);
    let state_or_region = first_of(address, REGION_KEYS).map(str::to_string);
    let zipcode = first_of(address, &["postcode"]).map(str::to_string);
    let country_code = first_of(address, &["country_code"]).map(str::to_ascii_lowercase);

    let full_display_address = match non_blank(candidate.display_name.as_deref()) {
        Some(display) => display.to_string(),
        None => [
            Some(street_address.as_str()),
            city.as_deref(),
            state_or_region.as_deref(),
            zipcode.as_deref(),
            Some(country.name),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", "),
    };

    Ok(ResolvedAddress {
        street_address,
        city,
        state_or_region,
        zipcode,
        country_display_name: country.name.to_string(),
        full_display_address,
        latitude,
        longitude,
        map_url: map_link(latitude, longitude),
        has_street,
        country_code,
    })
}

/// OpenStreetMap link centred on the given coordinates, with a marker.
pub fn map_link(latitude: f64, longitude: f64) -> String {
    let lat = format!("{latitude:.6}");
    let lon = format!("{longitude:.6}");
    match Url::parse_with_params(
        "https://www.openstreetmap.org/",
        &[("mlat", lat.as_str()), ("mlon", lon.as_str())],
    ) {
        Ok(mut url) => {
            url.set_fragment(Some(&format!("map={MAP_LINK_ZOOM_LEVEL}/{lat}/{lon}")));
            url.to_string()
        }
        // The base URL is a literal; parsing cannot fail.
        Err(_) => format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}"),
    }
}

fn parse_coordinate(
    raw: &str,
    range: std::ops::RangeInclusive<f64>,
    field: &str,
) -> Result<f64, GeocodeError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GeocodeError::Fatal(format!("invalid {field} '{raw}' in geocoder response")))?;
    if !range.contains(&value) {
        return Err(GeocodeError::Fatal(format!(
            "{field} {value} out of range in geocoder response"
        )));
    }
    Ok(value)
}

fn first_of<'a>(address: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| address.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
