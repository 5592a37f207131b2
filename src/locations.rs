//! Static US location table mapping cities to DataForSEO location codes.
//!
//! The table is compiled into the binary and never mutated at runtime.
//! Lookups are exact string matches after trimming; there is no fuzzy
//! matching and no fallback code for unknown places.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown location: {city}, {state}")]
pub struct UnknownLocation {
    pub city: String,
    pub state: String,
}

pub struct StateEntry {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub cities: &'static [CityEntry],
}

pub struct CityEntry {
    pub name: &'static str,
    pub code: i32,
}

pub static US_LOCATIONS: &[StateEntry] = &[
    StateEntry {
        name: "Texas",
        abbreviation: "TX",
        cities: &[
            CityEntry { name: "Dallas", code: 1_003_735 },
            CityEntry { name: "Houston", code: 1_003_811 },
            CityEntry { name: "Austin", code: 1_003_550 },
            CityEntry { name: "San Antonio", code: 1_004_100 },
        ],
    },
    StateEntry {
        name: "California",
        abbreviation: "CA",
        cities: &[
            CityEntry { name: "Los Angeles", code: 1_003_910 },
            CityEntry { name: "San Francisco", code: 1_004_109 },
            CityEntry { name: "San Diego", code: 1_004_102 },
            CityEntry { name: "Sacramento", code: 1_004_088 },
        ],
    },
    StateEntry {
        name: "New York",
        abbreviation: "NY",
        cities: &[
            CityEntry { name: "New York City", code: 1_003_581 },
            CityEntry { name: "Buffalo", code: 1_003_622 },
            CityEntry { name: "Albany", code: 1_003_518 },
            CityEntry { name: "Rochester", code: 1_004_074 },
        ],
    },
    StateEntry {
        name: "Florida",
        abbreviation: "FL",
        cities: &[
            CityEntry { name: "Miami", code: 1_003_937 },
            CityEntry { name: "Orlando", code: 1_004_004 },
            CityEntry { name: "Tampa", code: 1_004_145 },
            CityEntry { name: "Jacksonville", code: 1_003_846 },
        ],
    },
];

/// Resolves a city within a state to its provider location code.
///
/// The state matches either the full name or the postal abbreviation;
/// both comparisons are case-sensitive exact matches on the trimmed input.
pub fn resolve(state: &str, city: &str) -> Result<i32, UnknownLocation> {
    let state_input = state.trim();
    let city_input = city.trim();

    let unknown = || UnknownLocation {
        city: city_input.to_string(),
        state: state_input.to_string(),
    };

    let entry = US_LOCATIONS
        .iter()
        .find(|s| s.name == state_input || s.abbreviation == state_input)
        .ok_or_else(unknown)?;

    entry
        .cities
        .iter()
        .find(|c| c.name == city_input)
        .map(|c| c.code)
        .ok_or_else(unknown)
}

/// Splits a `"City, State"` search input into its parts.
///
/// Returns `None` when there is no comma or either side is empty.
#[must_use]
pub fn parse_location(input: &str) -> Option<(String, String)> {
    let (city, state) = input.split_once(',')?;
    let city = city.trim();
    let state = state.trim();

    if city.is_empty() || state.is_empty() {
        return None;
    }

    Some((city.to_string(), state.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_configured_pair_resolves() {
        for state in US_LOCATIONS {
            for city in state.cities {
                assert_eq!(resolve(state.name, city.name), Ok(city.code));
                assert_eq!(resolve(state.abbreviation, city.name), Ok(city.code));
            }
        }
    }

    #[test]
    fn resolve_known_city() {
        assert_eq!(resolve("Texas", "Austin"), Ok(1_003_550));
        assert_eq!(resolve("TX", "Austin"), Ok(1_003_550));
    }

    #[test]
    fn resolve_trims_input() {
        assert_eq!(resolve(" Texas ", " Dallas "), Ok(1_003_735));
    }

    #[test]
    fn unknown_state_fails() {
        let err = resolve("Narnia", "Austin").unwrap_err();
        assert_eq!(err.state, "Narnia");
        assert_eq!(err.city, "Austin");
    }

    #[test]
    fn unknown_city_under_known_state_fails() {
        assert!(resolve("Texas", "El Paso").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(resolve("texas", "Austin").is_err());
        assert!(resolve("Texas", "austin").is_err());
    }

    #[test]
    fn parse_location_splits_on_first_comma() {
        assert_eq!(
            parse_location("Austin, TX"),
            Some(("Austin".to_string(), "TX".to_string()))
        );
        assert_eq!(
            parse_location("San Antonio,Texas"),
            Some(("San Antonio".to_string(), "Texas".to_string()))
        );
    }

    #[test]
    fn parse_location_rejects_malformed_input() {
        assert_eq!(parse_location("Austin"), None);
        assert_eq!(parse_location(", TX"), None);
        assert_eq!(parse_location("Austin, "), None);
    }
}
