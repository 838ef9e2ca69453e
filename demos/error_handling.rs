//! Error handling example for addrcheck-rs
//!
//! A missing gazetteer is an error, never a silent "no match"; geocoder
//! failures are outcomes distinct from a 0.0 score.

use addrcheck_core::geocode::GeocodeError;
use addrcheck_core::prelude::*;

struct Offline;

impl Geocoder for Offline {
    fn geocode(&self, _query: &str) -> std::result::Result<Vec<GeocodeResult>, GeocodeError> {
        Err(GeocodeError::Transport("network unreachable".into()))
    }
}

struct Slow;

impl Geocoder for Slow {
    fn geocode(&self, _query: &str) -> std::result::Result<Vec<GeocodeResult>, GeocodeError> {
        Err(GeocodeError::Timeout)
    }
}

fn main() -> Result<()> {
    println!("=== addrcheck-rs Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a gazetteer that does not exist ---");
    let cache = GazetteerCache::new(JsonFileSource::in_dir("/does/not/exist"));
    let checker = AddressChecker::new(&cache);
    match checker.validate_region("9, Beleza Street, Asmara, Eritrea", "Eritrea") {
        Ok(v) => println!("  unexpected answer: {v}"),
        Err(e) => println!("  ✗ {e}"),
    }
    // Disputed regions never need the gazetteer
    let ok = checker.validate_region("12 Rue, Dakhla, Morocco", "Western Sahara")?;
    println!("  Dakhla in Western Sahara: {ok}");
    println!();

    // Example 2: Geocoder outcomes
    println!("--- Example 2: Geocoder outcomes ---");
    let address = "175-4 Street, Asmara, Maekel Region, Eritrea";
    for outcome in [
        check_with_geocoder(&Offline, address),
        check_with_geocoder(&Slow, address),
    ] {
        match &outcome {
            ScoreOutcome::Scored(s) => println!("  score {s}"),
            ScoreOutcome::Timeout => println!("  {outcome}: ask again later"),
            ScoreOutcome::ApiError(detail) => println!("  {outcome}: {detail}"),
        }
    }

    Ok(())
}
