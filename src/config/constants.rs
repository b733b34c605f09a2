//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including geocoder etiquette, timeouts and retry parameters.

// Server
/// Default listen address for the HTTP server
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

// Geocoding service
/// Public Nominatim instance
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent sent to the geocoding service.
///
/// The Nominatim usage policy requires an application-identifying User-Agent
/// with a way to contact the operator. Deployments should override this with
/// their own contact details via `--user-agent` or `GEOCODER_USER_AGENT`.
pub const DEFAULT_USER_AGENT: &str = "RealAddressGenerator/1.0 (contact@example.com)";

/// Language requested for address components and display names
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en";

/// Minimum interval between two geocoder requests in milliseconds.
/// Nominatim allows at most one request per second; 1.1s keeps a margin
/// for clock jitter on the server side.
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 1100;

/// Per-request timeout for geocoder calls in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

// Retry strategy
/// Maximum number of attempts per tier (initial attempt + retries)
pub const DEFAULT_RETRY_MAX_ATTEMPTS: usize = 3;
/// Delay before the first retry in milliseconds; doubles on each retry
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 2000;
/// Maximum delay between retries in milliseconds
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 10_000;

// Resolution
/// Number of candidates requested for the country-only tier
pub const DEFAULT_COUNTRY_ONLY_LIMIT: u8 = 10;
/// Upper bound accepted for `country_only_limit` (Nominatim caps at 50)
pub const MAX_COUNTRY_ONLY_LIMIT: u8 = 50;

/// POI keywords used to steer searches towards street-level records.
pub const SEARCH_KEYWORDS: &[&str] = &[
    "hotel",
    "restaurant",
    "school",
    "cafe",
    "bakery",
    "pharmacy",
    "library",
    "post office",
    "park",
    "supermarket",
    "museum",
    "hospital",
];

/// Zoom level for reverse lookups (18 = building / street level)
pub const REVERSE_ZOOM_LEVEL: u8 = 18;

/// Zoom level used in generated map links
pub const MAP_LINK_ZOOM_LEVEL: u8 = 18;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
