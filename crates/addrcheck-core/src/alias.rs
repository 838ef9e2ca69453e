// crates/addrcheck-core/src/alias.rs

//! # Country Alias Table
//!
//! Maps informal or abbreviated country spellings onto the canonical,
//! lower-case names used by the gazetteer. The table is immutable and built
//! once on first use.
//!
//! No alias *target* is itself an alias key, so [`canonical_country`] is
//! idempotent.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(informal, canonical)` pairs. Keys and values are lower-case.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    // Korea
    ("korea, south", "south korea"),
    ("korea, north", "north korea"),
    // Cote d'Ivoire
    ("cote d ivoire", "ivory coast"),
    ("côte d'ivoire", "ivory coast"),
    ("cote d'ivoire", "ivory coast"),
    // Gambia
    ("the gambia", "gambia"),
    // Netherlands
    ("netherlands", "the netherlands"),
    ("holland", "the netherlands"),
    // Congo
    ("congo, democratic republic of the", "democratic republic of the congo"),
    ("drc", "democratic republic of the congo"),
    ("congo, republic of the", "republic of the congo"),
    // Burma / Myanmar
    ("burma", "myanmar"),
    // Bonaire
    ("bonaire", "bonaire, saint eustatius and saba"),
    // Abbreviations
    ("usa", "united states"),
    ("us", "united states"),
    ("united states of america", "united states"),
    ("uk", "united kingdom"),
    ("great britain", "united kingdom"),
    ("britain", "united kingdom"),
    ("uae", "united arab emirates"),
    ("u.s.a.", "united states"),
    ("u.s.", "united states"),
    ("u.k.", "united kingdom"),
];

static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_ALIASES.iter().copied().collect());

/// Raw table lookup. `key` must already be lower-case; no fallback.
#[inline]
pub fn alias_for(key: &str) -> Option<&'static str> {
    ALIAS_INDEX.get(key).copied()
}

/// Canonicalizes a country label: lower-cased, trimmed, then mapped through
/// the alias table (identity when there is no alias).
///
/// ```rust
/// use addrcheck_core::alias::canonical_country;
///
/// assert_eq!(canonical_country("US"), "united states");
/// assert_eq!(canonical_country("united states"), "united states");
/// assert_eq!(canonical_country("Eritrea"), "eritrea");
/// ```
pub fn canonical_country(country: &str) -> String {
    let key = country.trim().to_lowercase();
    match alias_for(&key) {
        Some(canonical) => canonical.to_string(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_resolve() {
        assert_eq!(canonical_country("USA"), "united states");
        assert_eq!(canonical_country(" u.k. "), "united kingdom");
        assert_eq!(canonical_country("Holland"), "the netherlands");
        assert_eq!(canonical_country("Korea, South"), "south korea");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        for (informal, _) in COUNTRY_ALIASES {
            let once = canonical_country(informal);
            assert_eq!(canonical_country(&once), once, "alias target {once} is itself aliased");
        }
    }

    #[test]
    fn unknown_names_pass_through_lowered() {
        assert_eq!(canonical_country("Eritrea"), "eritrea");
        assert_eq!(alias_for("eritrea"), None);
    }
}
