//! Fallback tiers and tier planning.

use strum_macros::EnumIter as EnumIterMacro;

use super::query::AddressQuery;

/// One step of the fallback sequence, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Tier {
    /// Every supplied hint
    FullPrecision,
    /// City and state; zipcodes are the hint most likely to be stale or mistyped
    DropZipcode,
    /// City only
    DropState,
    /// Zipcode only
    DropCity,
    /// Anywhere in the country, random pick among several candidates
    CountryOnly,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::FullPrecision => "full_precision",
            Tier::DropZipcode => "drop_zipcode",
            Tier::DropState => "drop_state",
            Tier::DropCity => "drop_city",
            Tier::CountryOnly => "country_only",
        }
    }
}

/// The locality hints sent with a structured search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub state: Option<String>,
}

impl Hints {
    /// Takes the hints of a query, dropping blank values.
    pub fn from_query(query: &AddressQuery) -> Self {
        Hints {
            city: clean(query.city.as_deref()),
            zipcode: clean(query.zipcode.as_deref()),
            state: clean(query.state.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.zipcode.is_none() && self.state.is_none()
    }
}

/// A planned attempt: the tier and, except for `CountryOnly`, its hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTier {
    pub tier: Tier,
    pub hints: Option<Hints>,
}

/// Plans the attempts for a query.
///
/// Tiers whose hint set is empty or identical to an earlier tier's are
/// skipped, so no identical request is sent twice. `CountryOnly` always
/// closes the plan.
pub fn plan_tiers(query: &AddressQuery) -> Vec<PlannedTier> {
    let full = Hints::from_query(query);
    let candidates = [
        (Tier::FullPrecision, full.clone()),
        (
            Tier::DropZipcode,
            Hints {
                zipcode: None,
                ..full.clone()
            },
        ),
        (
            Tier::DropState,
            Hints {
                city: full.city.clone(),
                ..Hints::default()
            },
        ),
        (
            Tier::DropCity,
            Hints {
                zipcode: full.zipcode.clone(),
                ..Hints::default()
            },
        ),
    ];

    let mut planned: Vec<PlannedTier> = Vec::with_capacity(candidates.len() + 1);
    for (tier, hints) in candidates {
        if hints.is_empty() || planned.iter().any(|p| p.hints.as_ref() == Some(&hints)) {
            continue;
        }
        planned.push(PlannedTier {
            tier,
            hints: Some(hints),
        });
    }
    planned.push(PlannedTier {
        tier: Tier::CountryOnly,
        hints: None,
    });
    planned
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(query: &AddressQuery) -> Vec<Tier> {
        plan_tiers(query).into_iter().map(|p| p.tier).collect()
    }

    #[test]
    fn test_all_hints_plan_every_tier() {
        let query = AddressQuery::new("US")
            .with_city("Springfield")
            .with_zipcode("62701")
            .with_state("Illinois");
        assert_eq!(
            tiers(&query),
            vec![
                Tier::FullPrecision,
                Tier::DropZipcode,
                Tier::DropState,
                Tier::DropCity,
                Tier::CountryOnly
            ]
        );

        let plan = plan_tiers(&query);
        assert_eq!(
            plan[1].hints,
            Some(Hints {
                city: Some("Springfield".into()),
                zipcode: None,
                state: Some("Illinois".into()),
            })
        );
        assert_eq!(
            plan[3].hints,
            Some(Hints {
                zipcode: Some("62701".into()),
                ..Hints::default()
            })
        );
    }

    #[test]
    fn test_country_only_input() {
        assert_eq!(tiers(&AddressQuery::new("JP")), vec![Tier::CountryOnly]);
    }

    #[test]
    fn test_city_only_collapses_to_one_attempt() {
        let query = AddressQuery::new("US").with_city("New York");
        assert_eq!(tiers(&query), vec![Tier::FullPrecision, Tier::CountryOnly]);
    }

    #[test]
    fn test_city_and_zipcode() {
        // Dropping the zipcode leaves the city alone, which makes DropState redundant.
        let query = AddressQuery::new("US")
            .with_city("Springfield")
            .with_zipcode("00000");
        assert_eq!(
            tiers(&query),
            vec![
                Tier::FullPrecision,
                Tier::DropZipcode,
                Tier::DropCity,
                Tier::CountryOnly
            ]
        );
    }

    #[test]
    fn test_zipcode_only_is_not_repeated() {
        let query = AddressQuery::new("US").with_zipcode("90210");
        assert_eq!(tiers(&query), vec![Tier::FullPrecision, Tier::CountryOnly]);
    }

    #[test]
    fn test_state_only() {
        let query = AddressQuery::new("US").with_state("Texas");
        assert_eq!(tiers(&query), vec![Tier::FullPrecision, Tier::CountryOnly]);
    }

    #[test]
    fn test_blank_hints_are_ignored() {
        let query = AddressQuery::new("US")
            .with_city("  ")
            .with_zipcode("")
            .with_state("Ohio ");
        let plan = plan_tiers(&query);
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan[0].hints,
            Some(Hints {
                state: Some("Ohio".into()),
                ..Hints::default()
            })
        );
    }
}
