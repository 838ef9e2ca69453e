// crates/addrcheck-core/src/region.rs

//! # Region Validator
//!
//! Answers "does this generated address belong to the seed region?". The
//! seed is either a city name, a country name, or one of the disputed
//! territories that standard gazetteers do not cover.

use crate::alias::alias_for;
use crate::extract::extract_city_country;
use crate::gazetteer::Gazetteer;

/// Settlements whose presence marks an address as Western Saharan.
pub const WESTERN_SAHARA_CITIES: &[&str] = &[
    "laayoune",
    "dakhla",
    "boujdour",
    "es semara",
    "sahrawi",
    "tifariti",
    "aousserd",
];

/// Seeds handled by substring rules instead of gazetteer lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputedRegion {
    WesternSahara,
    Luhansk,
    Crimea,
    Donetsk,
}

impl DisputedRegion {
    /// `seed_lower` must already be lower-case.
    pub fn from_seed(seed_lower: &str) -> Option<Self> {
        match seed_lower {
            "west sahara" | "western sahara" => Some(Self::WesternSahara),
            "luhansk" => Some(Self::Luhansk),
            "crimea" => Some(Self::Crimea),
            "donetsk" => Some(Self::Donetsk),
            _ => None,
        }
    }

    pub fn matches(self, generated: &str) -> bool {
        match self {
            Self::WesternSahara => check_western_sahara_cities(generated),
            Self::Luhansk => generated.to_lowercase().contains("luhansk"),
            Self::Crimea => generated.to_lowercase().contains("crimea"),
            Self::Donetsk => generated.to_lowercase().contains("donetsk"),
        }
    }
}

/// True if any of [`WESTERN_SAHARA_CITIES`] occurs in `generated`.
pub fn check_western_sahara_cities(generated: &str) -> bool {
    if generated.is_empty() {
        return false;
    }
    let lowered = generated.to_lowercase();
    WESTERN_SAHARA_CITIES.iter().any(|city| lowered.contains(city))
}

/// Validates that `generated` lies in the region named by `seed`.
///
/// - either input empty: `false`
/// - disputed seeds use [`DisputedRegion::matches`]
/// - otherwise the extractor runs on `generated` (two-part country when the
///   seed contains a comma). A city *and* a country must be recognized, and
///   then the city equals the seed, or the country equals the seed as
///   written or canonicalized.
pub fn validate_address_region(gazetteer: &Gazetteer, generated: &str, seed: &str) -> bool {
    if generated.is_empty() || seed.is_empty() {
        return false;
    }

    let seed_lower = seed.to_lowercase();
    if let Some(region) = DisputedRegion::from_seed(&seed_lower) {
        return region.matches(generated);
    }

    let parsed = extract_city_country(gazetteer, generated, seed.contains(','));
    if !parsed.has_city() || parsed.country.is_empty() {
        tracing::debug!(generated, seed, "region not recognized");
        return false;
    }

    // Alias lookup on the seed as given; surrounding spaces are not stripped.
    let seed_mapped = alias_for(&seed_lower).unwrap_or(seed_lower.as_str());
    parsed.city == seed_lower || parsed.country == seed_lower || parsed.country == seed_mapped
}
