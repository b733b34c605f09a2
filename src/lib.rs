//! real_address library: verified addresses with a localized persona
//!
//! This library resolves a country (plus optional city, state and zipcode
//! hints) to a real postal address through a Nominatim-compatible geocoder,
//! walking a fixed sequence of fallback tiers when the hints are wrong or
//! too narrow, and combines it with a generated name and phone number.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use real_address::initialization::init_generator;
//! use real_address::{AddressQuery, Config, ResolutionStats};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let generator = init_generator(&config, Arc::new(ResolutionStats::new()))?;
//!
//! let query = AddressQuery::new("美国").with_city("New York");
//! let profile = generator.generate(&query).await?;
//! println!("{} lives at {}", profile.name, profile.full_address);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod assemble;
pub mod config;
pub mod country;
pub mod error_handling;
pub mod generator;
pub mod geocode;
pub mod initialization;
pub mod persona;
pub mod rate_limiter;
pub mod resolver;
pub mod server;

// Re-export public API
pub use assemble::{assemble, GeneratedProfile};
pub use config::{Config, LogFormat, LogLevel};
pub use country::{CountryNormalizer, NormalizedCountry};
pub use error_handling::{
    GenerateError, GeocodeError, NormalizeError, PersonaUnavailable, ResolutionStats,
    ResolveError, RetryPolicy,
};
pub use generator::AddressGenerator;
pub use geocode::{GeocodeClient, ResolvedAddress};
pub use persona::{LocalPersonaGenerator, Persona, PersonaSource};
pub use rate_limiter::RateLimiter;
pub use resolver::{AddressQuery, AddressResolver, Resolution, Tier};
pub use server::{router, run_server, start_server, AppState};
