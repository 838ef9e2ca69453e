// crates/addrcheck-core/src/extract.rs

//! # Region Extractor
//!
//! Pulls a `(city, country)` pair out of a comma-delimited address. The
//! rightmost segment (or two) is the country; the remaining segments are
//! scanned right-to-left for a word or word pair the gazetteer confirms as a
//! city of that country.

use crate::alias::alias_for;
use crate::gazetteer::Gazetteer;
use crate::text::{has_ascii_digit, segments};
use serde::{Deserialize, Serialize};

/// Result of [`extract_city_country`]. Both fields are lower-case; either
/// may be empty. An empty country means nothing was recognized at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRegion {
    pub city: String,
    pub country: String,
}

impl ParsedRegion {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// Only the country was recognized.
    pub fn country_only(country: impl Into<String>) -> Self {
        Self::new(String::new(), country)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.country.is_empty()
    }

    #[inline]
    pub fn has_city(&self) -> bool {
        !self.city.is_empty()
    }
}

impl From<ParsedRegion> for (String, String) {
    fn from(r: ParsedRegion) -> Self {
        (r.city, r.country)
    }
}

/// The country segment(s) of an address and how many segments they used.
struct CountrySegment {
    canonical: String,
    consumed: usize,
}

fn resolve_country(parts: &[&str], two_part_country: bool) -> CountrySegment {
    let last = parts[parts.len() - 1];

    if two_part_country {
        let joined = format!("{}, {}", parts[parts.len() - 2], last);
        if let Some(canonical) = alias_for(&joined) {
            return CountrySegment {
                canonical: canonical.to_string(),
                consumed: 2,
            };
        }
    }

    CountrySegment {
        canonical: alias_for(last).map_or_else(|| last.to_string(), str::to_string),
        consumed: 1,
    }
}

/// Extracts `(city, country)` from `address`.
///
/// 1. fewer than two comma segments: nothing
/// 2. country = last segment, or with `two_part_country` the last two joined
///    by `", "` when that joined form is a known alias
/// 3. the remaining segments, rightmost first, are split into words; at each
///    word position the word itself and then the pair "previous current" are
///    tried against [`Gazetteer::city_in_country`], skipping candidates that
///    contain a digit. The first hit wins.
/// 4. no hit: country only
pub fn extract_city_country(
    gazetteer: &Gazetteer,
    address: &str,
    two_part_country: bool,
) -> ParsedRegion {
    if address.is_empty() {
        return ParsedRegion::default();
    }
    let lowered = address.to_lowercase();
    let parts = segments(&lowered);
    if parts.len() < 2 {
        return ParsedRegion::default();
    }

    let country = resolve_country(&parts, two_part_country);
    if country.canonical.is_empty() {
        return ParsedRegion::default();
    }

    let remaining = &parts[..parts.len() - country.consumed];
    for segment in remaining.iter().rev().filter(|s| !s.is_empty()) {
        let words: Vec<&str> = segment.split(' ').collect();
        for (idx, word) in words.iter().enumerate() {
            let pair = (idx > 0).then(|| format!("{} {}", words[idx - 1], word));
            let candidates = std::iter::once(*word).chain(pair.as_deref());

            for candidate in candidates {
                if has_ascii_digit(candidate) {
                    continue;
                }
                if gazetteer.city_in_country(candidate, &country.canonical) {
                    tracing::debug!(city = candidate, country = %country.canonical, "city matched");
                    return ParsedRegion::new(candidate, country.canonical);
                }
            }
        }
    }

    ParsedRegion::country_only(country.canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::{CityMap, CountryMap, GazetteerCity, GazetteerCountry};

    fn fixture() -> Gazetteer {
        let mut cities = CityMap::new();
        cities.insert("1".into(), GazetteerCity::new("Asmara", "ER"));
        cities.insert("2".into(), GazetteerCity::new("Keren", "ER"));
        cities.insert("3".into(), GazetteerCity::new("Seoul", "KR"));
        cities.insert("4".into(), GazetteerCity::new("Abidjan", "CI"));
        let mut countries = CountryMap::new();
        countries.insert("ER".into(), GazetteerCountry::new("ER", "Eritrea"));
        countries.insert("KR".into(), GazetteerCountry::new("KR", "South Korea"));
        countries.insert("CI".into(), GazetteerCountry::new("CI", "Ivory Coast"));
        Gazetteer::new(cities, countries)
    }

    #[test]
    fn extracts_city_and_country() {
        let r = extract_city_country(&fixture(), "some street 5, asmara, eritrea", false);
        assert_eq!(r, ParsedRegion::new("asmara", "eritrea"));
    }

    #[test]
    fn rightmost_city_wins() {
        let r = extract_city_country(&fixture(), "Keren Road 4, Asmara, Eritrea", false);
        assert_eq!(r.city, "asmara");
    }

    #[test]
    fn single_word_is_tried_before_pair() {
        let mut gz_cities = CityMap::new();
        gz_cities.insert("1".into(), GazetteerCity::new("Keren", "ER"));
        gz_cities.insert("2".into(), GazetteerCity::new("Old Keren", "ER"));
        let mut countries = CountryMap::new();
        countries.insert("ER".into(), GazetteerCountry::new("ER", "Eritrea"));
        let gz = Gazetteer::new(gz_cities, countries);

        // "old keren" would match too, but "keren" is tried first at index 1
        let r = extract_city_country(&gz, "12 Main St, old keren, eritrea", false);
        assert_eq!(r, ParsedRegion::new("keren", "eritrea"));
    }

    #[test]
    fn earlier_word_in_segment_wins() {
        let r = extract_city_country(&fixture(), "12 Main St, asmara keren, eritrea", false);
        assert_eq!(r.city, "asmara");
    }

    #[test]
    fn single_segment_is_nothing() {
        assert!(extract_city_country(&fixture(), "asmara eritrea", false).is_empty());
        assert!(extract_city_country(&fixture(), "", false).is_empty());
    }

    #[test]
    fn empty_last_segment_is_nothing() {
        assert!(extract_city_country(&fixture(), "asmara, ", false).is_empty());
    }

    #[test]
    fn unknown_city_keeps_country() {
        let r = extract_city_country(&fixture(), "12 Main St, Springfield, Eritrea", false);
        assert_eq!(r, ParsedRegion::country_only("eritrea"));
    }

    #[test]
    fn alias_country_is_canonicalized() {
        let r = extract_city_country(&fixture(), "plot 9, abidjan, cote d'ivoire", false);
        assert_eq!(r, ParsedRegion::new("abidjan", "ivory coast"));
    }

    #[test]
    fn two_part_country_consumes_both_segments() {
        let r = extract_city_country(&fixture(), "12 Gangnam-daero, Seoul, Korea, South", true);
        assert_eq!(r, ParsedRegion::new("seoul", "south korea"));
    }

    #[test]
    fn two_part_flag_falls_back_to_last_segment() {
        let r = extract_city_country(&fixture(), "5 Harnet Ave, Asmara, Eritrea", true);
        assert_eq!(r, ParsedRegion::new("asmara", "eritrea"));
    }

    #[test]
    fn candidates_with_digits_are_skipped() {
        let r = extract_city_country(&fixture(), "asmara1, eritrea", false);
        assert_eq!(r, ParsedRegion::country_only("eritrea"));
    }

    #[test]
    fn tuple_conversion() {
        let (city, country): (String, String) = ParsedRegion::new("keren", "eritrea").into();
        assert_eq!((city.as_str(), country.as_str()), ("keren", "eritrea"));
    }
}
