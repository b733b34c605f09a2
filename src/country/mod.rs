//! Country normalization.
//!
//! Maps free-form, multi-language country input ("US", "usa", "America",
//! "美国", "Deutschland", ...) to a canonical ISO 3166-1 alpha-2 code and the
//! English display name used in responses.
//!
//! Lookup order, first match wins:
//! 1. ISO alpha-2 / alpha-3 code
//! 2. Exact country name or curated alias
//! 3. Fuzzy containment against all known names and aliases
//!
//! Names come from the full ISO 3166-1 list (English and Chinese) plus a
//! curated alias table. The lookup maps are built once at startup and never
//! mutated afterwards.

mod iso;
mod table;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error_handling::NormalizeError;
pub use iso::{IsoCountry, ISO_3166_COUNTRIES};
pub use table::{CountryEntry, COUNTRIES};

/// Minimum input length, in characters, for the "known name contains input"
/// fuzzy direction on space-delimited scripts.
const MIN_WORD_FRAGMENT_CHARS: usize = 4;

/// Same minimum for scripts written without spaces (Han, Kana, Hangul, Thai).
const MIN_UNSPACED_FRAGMENT_CHARS: usize = 2;

/// A canonical country: ISO alpha-2 code plus English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedCountry {
    pub code: &'static str,
    pub name: &'static str,
}

impl NormalizedCountry {
    /// Lowercase code as expected by Nominatim's `countrycodes` parameter.
    pub fn geocoder_code(&self) -> String {
        self.code.to_ascii_lowercase()
    }
}

impl fmt::Display for NormalizedCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

impl From<&CountryEntry> for NormalizedCountry {
    fn from(entry: &CountryEntry) -> Self {
        NormalizedCountry {
            code: entry.alpha2,
            name: entry.name,
        }
    }
}

impl From<&IsoCountry> for NormalizedCountry {
    fn from(country: &IsoCountry) -> Self {
        NormalizedCountry {
            code: country.alpha2,
            name: country.name,
        }
    }
}

/// Pure, side-effect-free country lookup over static tables.
pub struct CountryNormalizer {
    countries: Vec<NormalizedCountry>,
    by_code: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
    /// Every name and alias in table order, for the fuzzy tier
    known_names: Vec<(String, usize)>,
}

impl CountryNormalizer {
    /// Builds the normalizer over the ISO list and the curated alias table.
    pub fn new() -> Self {
        Self::with_tables(ISO_3166_COUNTRIES, COUNTRIES)
    }

    /// Curated entries add aliases to the ISO country with the same alpha-2
    /// code and override its display name. Curated entries without an ISO
    /// counterpart are added as countries of their own.
    pub fn with_tables(iso: &'static [IsoCountry], curated: &'static [CountryEntry]) -> Self {
        let mut countries = Vec::with_capacity(iso.len());
        let mut by_code = HashMap::new();
        let mut names: Vec<(&'static str, usize)> = Vec::new();

        for country in iso {
            let idx = countries.len();
            countries.push(NormalizedCountry::from(country));
            by_code.insert(country.alpha2.to_ascii_lowercase(), idx);
            by_code.insert(country.alpha3.to_ascii_lowercase(), idx);
            names.push((country.name, idx));
            names.push((country.name_zh, idx));
        }

        for entry in curated {
            let idx = match by_code.get(&entry.alpha2.to_ascii_lowercase()) {
                Some(&idx) => {
                    countries[idx].name = entry.name;
                    idx
                }
                None => {
                    let idx = countries.len();
                    countries.push(NormalizedCountry::from(entry));
                    by_code.insert(entry.alpha2.to_ascii_lowercase(), idx);
                    by_code.insert(entry.alpha3.to_ascii_lowercase(), idx);
                    idx
                }
            };
            names.extend(
                std::iter::once(entry.name)
                    .chain(entry.aliases.iter().copied())
                    .map(|name| (name, idx)),
            );
        }

        let mut by_alias = HashMap::new();
        let mut known_names = Vec::with_capacity(names.len());
        for (name, idx) in names {
            let key = normalize_key(name);
            if key.is_empty() {
                continue;
            }
            if let Some(previous) = by_alias.insert(key.clone(), idx) {
                if previous != idx {
                    log::warn!(
                        "Country alias '{}' maps to both {} and {}; keeping {}",
                        key,
                        countries[previous].code,
                        countries[idx].code,
                        countries[idx].code
                    );
                }
            }
            known_names.push((key, idx));
        }

        log::debug!(
            "Loaded {} countries with {} name mappings",
            countries.len(),
            by_alias.len()
        );

        CountryNormalizer {
            countries,
            by_code,
            by_alias,
            known_names,
        }
    }

    /// Resolves raw country input to a `NormalizedCountry`.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::Unresolvable` when no tier produces a match,
    /// including for blank input.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedCountry, NormalizeError> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return Err(NormalizeError::Unresolvable(raw.to_string()));
        }

        let found = self
            .by_code
            .get(&key)
            .or_else(|| self.by_alias.get(&key))
            .copied()
            .or_else(|| self.fuzzy_match(&key));

        match found {
            Some(idx) => Ok(self.countries[idx]),
            None => Err(NormalizeError::Unresolvable(raw.to_string())),
        }
    }

    /// Last-resort containment matching.
    ///
    /// Prefers the longest known name contained in the input ("republic of
    /// france" → France, "美国纽约" → United States), then the first known
    /// name, in table order, that contains the input ("kingdom" → United
    /// Kingdom). The second direction needs a minimum input length that
    /// depends on the script, so a single character never matches.
    fn fuzzy_match(&self, key: &str) -> Option<usize> {
        let contained = self
            .known_names
            .iter()
            .filter(|(name, _)| contains_phrase(key, name))
            .max_by_key(|(name, _)| name.chars().count())
            .map(|(_, idx)| *idx);
        if contained.is_some() {
            return contained;
        }

        let min_chars = if has_unspaced_script(key) {
            MIN_UNSPACED_FRAGMENT_CHARS
        } else {
            MIN_WORD_FRAGMENT_CHARS
        };
        if key.chars().count() < min_chars {
            return None;
        }
        self.known_names
            .iter()
            .find(|(name, _)| contains_phrase(name, key))
            .map(|(_, idx)| *idx)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases, trims, drops dots, collapses whitespace and strips a leading
/// article, so "  The U.S.A. " and "usa" produce the same key.
fn normalize_key(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('.', "");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_prefix("the ") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => collapsed,
    }
}

/// Scripts written without spaces between words.
fn is_unspaced_script(c: char) -> bool {
    matches!(c,
        '\u{0E00}'..='\u{0E7F}'     // Thai
        | '\u{1100}'..='\u{11FF}'   // Hangul Jamo
        | '\u{3040}'..='\u{30FF}'   // Hiragana, Katakana
        | '\u{3130}'..='\u{318F}'   // Hangul compatibility Jamo
        | '\u{31F0}'..='\u{31FF}'   // Katakana extensions
        | '\u{3400}'..='\u{4DBF}'   // CJK extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK unified ideographs
        | '\u{AC00}'..='\u{D7AF}'   // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'   // CJK compatibility ideographs
    )
}

fn has_unspaced_script(text: &str) -> bool {
    text.chars().any(is_unspaced_script)
}

/// Whether `needle` occurs in `haystack`.
///
/// Needles in space-delimited scripts, accented Latin included, must match
/// whole words so "peru" does not match "perugia". Needles containing Han,
/// Kana, Hangul or Thai use plain substring matching.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    if has_unspaced_script(needle) {
        return haystack.contains(needle);
    }
    let hay_words: Vec<&str> = haystack.split(' ').collect();
    let needle_words: Vec<&str> = needle.split(' ').collect();
    hay_words
        .windows(needle_words.len())
        .any(|window| window == needle_words.as_slice())
}
