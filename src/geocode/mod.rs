//! Geocoding service access.
//!
//! This module provides:
//! - `GeocodeRequest` and the search modes sent to Nominatim
//! - `GeocodeClient`, which issues one rate-limited request per call and
//!   classifies every failure as not-found, transient or fatal
//! - Parsing of raw candidates into `ResolvedAddress`

mod client;
mod parse;
mod types;

pub use client::GeocodeClient;
pub use parse::{map_link, parse_candidate};
pub use types::{CandidatePick, GeocodeRequest, QueryKind, RawCandidate, ResolvedAddress};
