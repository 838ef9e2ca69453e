// crates/addrcheck-core/src/gazetteer/mod.rs

//! # Gazetteer
//!
//! Read-only index of cities and countries, built from two geonames-style
//! mappings:
//!
//! - cities keyed by internal id: `{ "343300": { "name": "Asmara", "countrycode": "ER" } }`
//! - countries keyed by code: `{ "ER": { "name": "Eritrea" } }`
//!
//! Both mappings are ordered by key, which fixes what "first match" means
//! for every linear scan below.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

mod cache;
mod io;
mod source;

pub use cache::GazetteerCache;
pub use source::{default_data_dir, GazetteerSource, StaticSource};
pub use source::{CachedJsonSource, JsonFileSource};

/// Suffix appended to the cities file name for the binary snapshot.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "gaz.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.gaz.bin";

pub const DEFAULT_CITIES_FILE: &str = "geonames_cities.json";
pub const DEFAULT_COUNTRIES_FILE: &str = "geonames_countries.json";

/// A city entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerCity {
    #[serde(default)]
    pub name: String,
    /// Code of the owning country, a key of the country mapping.
    #[serde(default)]
    pub countrycode: String,
}

impl GazetteerCity {
    pub fn new(name: impl Into<String>, countrycode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            countrycode: countrycode.into(),
        }
    }
}

/// A country entry. `code` is filled from the mapping key when the source
/// record does not carry one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerCountry {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl GazetteerCountry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

pub type CityMap = BTreeMap<String, GazetteerCity>;
pub type CountryMap = BTreeMap<String, GazetteerCountry>;

/// Serialized form of the gazetteer (what goes into the bincode snapshot).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct GazetteerData {
    pub cities: CityMap,
    pub countries: CountryMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub cities: usize,
    pub countries: usize,
}

/// The in-memory gazetteer.
#[derive(Clone, Debug)]
pub struct Gazetteer {
    data: GazetteerData,
    /// Country code -> city ids of that country, in city-map order.
    by_country: HashMap<String, Vec<String>>,
}

impl Gazetteer {
    pub fn new(cities: CityMap, mut countries: CountryMap) -> Self {
        for (code, country) in countries.iter_mut() {
            if country.code.is_empty() {
                country.code = code.clone();
            }
        }
        Self::from_data(GazetteerData { cities, countries })
    }

    pub(crate) fn from_data(data: GazetteerData) -> Self {
        let mut by_country: HashMap<String, Vec<String>> = HashMap::new();
        for (id, city) in &data.cities {
            by_country
                .entry(city.countrycode.clone())
                .or_default()
                .push(id.clone());
        }
        Self { data, by_country }
    }

    pub(crate) fn data(&self) -> &GazetteerData {
        &self.data
    }

    pub fn countries(&self) -> &CountryMap {
        &self.data.countries
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            cities: self.data.cities.len(),
            countries: self.data.countries.len(),
        }
    }

    /// Resolves a country name to its code by exact, case-insensitive,
    /// trimmed comparison. First match in key order wins.
    pub fn country_code(&self, country_name: &str) -> Option<&str> {
        let wanted = country_name.trim().to_lowercase();
        self.data
            .countries
            .iter()
            .find(|(_, c)| c.name.trim().to_lowercase() == wanted)
            .map(|(code, _)| code.as_str())
    }

    /// Cities registered under a country code, in city-map order.
    pub fn cities_in<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a GazetteerCity> + 'a {
        self.by_country
            .get(code)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.data.cities.get(id))
    }

    /// Heuristic "is this city in that country" check.
    ///
    /// For every gazetteer city of the resolved country, matches on:
    /// 1. exact case-insensitive (trimmed) name equality;
    /// 2. multi-word query whose first word prefixes the gazetteer name;
    /// 3. multi-word query whose second word occurs anywhere in the gazetteer name.
    ///
    /// Rules 2 and 3 are loose: `"new delhi"` matches any city
    /// whose name starts with `"new"`. A single-word query only matches via
    /// rule 1. Words are split on single spaces.
    pub fn city_in_country(&self, city: &str, country: &str) -> bool {
        if city.is_empty() || country.is_empty() {
            return false;
        }
        let Some(code) = self.country_code(country) else {
            return false;
        };

        let query = city.to_lowercase();
        let query_trimmed = query.trim();
        let words: Vec<&str> = query.split(' ').collect();
        let multi_word = words.len() >= 2;

        self.cities_in(code).any(|candidate| {
            let name = candidate.name.to_lowercase();
            name.trim() == query_trimmed
                || (multi_word && name.starts_with(words[0]))
                || (multi_word && name.contains(words[1]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Gazetteer {
        let mut cities = CityMap::new();
        cities.insert("1".into(), GazetteerCity::new("Asmara", "ER"));
        cities.insert("2".into(), GazetteerCity::new("New Delhi", "IN"));
        cities.insert("3".into(), GazetteerCity::new("Keren", "ER"));
        let mut countries = CountryMap::new();
        countries.insert("ER".into(), GazetteerCountry::new("", "Eritrea"));
        countries.insert("IN".into(), GazetteerCountry::new("", "India"));
        Gazetteer::new(cities, countries)
    }

    #[test]
    fn country_codes_fill_from_keys() {
        let gz = fixture();
        assert_eq!(gz.countries()["ER"].code, "ER");
        assert_eq!(gz.country_code("  ERITREA "), Some("ER"));
        assert_eq!(gz.country_code("Atlantis"), None);
    }

    #[test]
    fn duplicate_country_names_resolve_to_lowest_code() {
        let mut cities = CityMap::new();
        cities.insert("1".into(), GazetteerCity::new("Kinshasa", "CD"));
        cities.insert("2".into(), GazetteerCity::new("Brazzaville", "CG"));
        let mut countries = CountryMap::new();
        countries.insert("CG".into(), GazetteerCountry::new("", "Congo"));
        countries.insert("CD".into(), GazetteerCountry::new("", "Congo"));
        let gz = Gazetteer::new(cities, countries);

        assert_eq!(gz.country_code("congo"), Some("CD"));
        assert!(gz.city_in_country("kinshasa", "congo"));
        assert!(!gz.city_in_country("brazzaville", "congo"));
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let gz = fixture();
        assert!(gz.city_in_country("asmara", "eritrea"));
        assert!(gz.city_in_country("ASMARA", "Eritrea"));
        assert!(!gz.city_in_country("asmara", "india"));
    }

    #[test]
    fn single_word_needs_equality() {
        let gz = fixture();
        assert!(!gz.city_in_country("asm", "eritrea"));
        assert!(!gz.city_in_country("delhi", "india"));
    }

    #[test]
    fn multi_word_rules_are_loose() {
        let gz = fixture();
        // first word prefixes "new delhi"
        assert!(gz.city_in_country("new york", "india"));
        // second word contained in "keren"
        assert!(gz.city_in_country("old keren", "eritrea"));
        assert!(!gz.city_in_country("old town", "eritrea"));
    }

    #[test]
    fn empty_inputs_never_match() {
        let gz = fixture();
        assert!(!gz.city_in_country("", "eritrea"));
        assert!(!gz.city_in_country("asmara", ""));
    }

    #[test]
    fn stats_count_both_maps() {
        assert_eq!(
            fixture().stats(),
            GazetteerStats {
                cities: 3,
                countries: 2
            }
        );
    }
}
