//! Persona generation.
//!
//! `PersonaSource` is the seam for the persona capability: given a country
//! code it returns a locally plausible name and phone number.
//! `LocalPersonaGenerator` implements it from static per-country tables.

mod locales;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::error_handling::PersonaUnavailable;
pub use locales::{locale_for, Locale, NameOrder};

/// A generated name and phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: String,
    pub phone: String,
}

/// Produces a persona for an ISO alpha-2 country code.
pub trait PersonaSource: Send + Sync {
    fn persona(&self, country_code: &str) -> Result<Persona, PersonaUnavailable>;
}

/// Table-driven persona generator; unknown countries use US conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPersonaGenerator;

impl PersonaSource for LocalPersonaGenerator {
    fn persona(&self, country_code: &str) -> Result<Persona, PersonaUnavailable> {
        let locale = locale_for(country_code);
        let mut rng = rand::rng();

        let given = locale.given_names.choose(&mut rng);
        let family = locale.family_names.choose(&mut rng);
        let pattern = locale.phone_patterns.choose(&mut rng);

        match (given, family, pattern) {
            (Some(given), Some(family), Some(pattern)) => Ok(Persona {
                name: compose_name(given, family, locale.order),
                phone: fill_pattern(pattern, &mut rng),
            }),
            _ => Err(PersonaUnavailable(format!(
                "empty persona tables for country {country_code}"
            ))),
        }
    }
}

fn compose_name(given: &str, family: &str, order: NameOrder) -> String {
    match order {
        NameOrder::GivenFirst => format!("{given} {family}"),
        NameOrder::FamilyFirstJoined => format!("{family}{given}"),
    }
}

/// Replaces `#` with a random digit and `%` with a random non-zero digit.
fn fill_pattern<R: Rng + ?Sized>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            '%' => char::from(b'0' + rng.random_range(1..10u8)),
            other => other,
        })
        .collect()
}
