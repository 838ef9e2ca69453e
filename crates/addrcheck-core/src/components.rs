// crates/addrcheck-core/src/components.rs

//! Splits a geocoder `display_name` into street / city / country.
//!
//! Positional guesses only; none of this consults the gazetteer.

use crate::alias::alias_for;
use crate::text::{has_ascii_digit, segments};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

static CITY_INDICATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(city|town|village|municipality|borough|district|township|commune)\b")
        .expect("static pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub street: String,
    pub city: String,
    pub country: String,
}

pub fn parse_address_components(display_name: &str) -> AddressComponents {
    AddressComponents {
        street: extract_street(display_name),
        city: extract_city(display_name),
        country: extract_country(display_name),
    }
}

/// First part carrying a digit, else the first part.
pub fn extract_street(display_name: &str) -> String {
    if display_name.is_empty() {
        return UNKNOWN.to_string();
    }
    let parts = segments(display_name);
    parts
        .iter()
        .find(|p| has_ascii_digit(p))
        .or_else(|| parts.first())
        .filter(|p| !p.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), |p| p.to_string())
}

/// Too short to be a city; also covers region codes like `"CA"`.
fn is_region_like(part: &str) -> bool {
    part.chars().count() <= 2
}

/// A part naming itself a city/town/..., with the indicator removed; else
/// the third- or second-from-last part.
pub fn extract_city(display_name: &str) -> String {
    if display_name.is_empty() {
        return UNKNOWN.to_string();
    }
    let parts = segments(display_name);

    for part in &parts {
        if CITY_INDICATOR.is_match(part) {
            let stripped = CITY_INDICATOR.replace(part, "");
            let stripped = stripped.trim();
            let city = if stripped.is_empty() { *part } else { stripped };
            return city.to_string();
        }
    }

    let n = parts.len();
    if n >= 3 && !is_region_like(parts[n - 3]) {
        return parts[n - 3].to_string();
    }
    if n >= 2 && !is_region_like(parts[n - 2]) {
        return parts[n - 2].to_string();
    }
    UNKNOWN.to_string()
}

/// Last part, canonicalized when it is a known alias, otherwise as written.
pub fn extract_country(display_name: &str) -> String {
    if display_name.is_empty() {
        return UNKNOWN.to_string();
    }
    let parts = segments(display_name);
    let last = parts[parts.len() - 1];
    alias_for(&last.to_lowercase()).map_or_else(|| last.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nominatim_display_name() {
        let c = parse_address_components(
            "9, Beleza Street, Tiravolo, Asmara, Maekel Region, 291, Eritrea",
        );
        assert_eq!(c.street, "9");
        assert_eq!(c.country, "Eritrea");
        assert_eq!(c.city, "Maekel Region");
    }

    #[test]
    fn city_indicator_is_stripped() {
        assert_eq!(
            extract_city("12 Main St, Springfield Township, Ohio, United States"),
            "Springfield"
        );
        assert_eq!(extract_city("Town, Somewhere, Land"), "Town");
    }

    #[test]
    fn region_codes_are_skipped() {
        assert_eq!(extract_city("1600 Amphitheatre Pkwy, CA, 94043, USA"), "94043");
        assert_eq!(extract_city("Rue 3, Lyon, FR, X"), "Lyon");
    }

    #[test]
    fn country_aliases_are_canonicalized() {
        assert_eq!(extract_country("10 Downing St, London, UK"), "united kingdom");
        assert_eq!(extract_country("Asmara, Eritrea"), "Eritrea");
    }

    #[test]
    fn empty_input_is_unknown() {
        let c = parse_address_components("");
        assert_eq!(c.street, UNKNOWN);
        assert_eq!(c.city, UNKNOWN);
        assert_eq!(c.country, UNKNOWN);
    }

    #[test]
    fn street_falls_back_to_first_part() {
        assert_eq!(extract_street("Beleza Street, Asmara"), "Beleza Street");
    }
}
