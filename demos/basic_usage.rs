//! Basic usage example for addrcheck-rs
//!
//! Loads the bundled gazetteer and runs the plausibility and region checks.

use addrcheck_core::prelude::*;

fn main() -> Result<()> {
    println!("=== addrcheck-rs Basic Usage ===\n");

    let cache = GazetteerCache::new(JsonFileSource::in_dir(
        addrcheck_core::gazetteer::default_data_dir(),
    ));
    let checker = AddressChecker::new(&cache);

    let stats = checker.gazetteer()?.stats();
    println!("Gazetteer: {} countries, {} cities\n", stats.countries, stats.cities);

    let addresses = [
        ("Bristol Pension, 9, Beleza Street, Asmara, Maekel Region, Eritrea", "Eritrea"),
        ("221B Baker Street, London, NW1 6XE, UK", "United Kingdom"),
        ("Avenue de Smara 14, Laayoune, Morocco", "Western Sahara"),
        ("Asmara, Eritrea", "Eritrea"),
    ];

    for (address, seed) in addresses {
        println!("--- {address}");
        println!("  looks like an address: {}", checker.looks_like_address(address));
        let parsed = checker.extract(address, seed.contains(','))?;
        println!("  city: {:?}, country: {:?}", parsed.city, parsed.country);
        println!("  in {seed}: {}", checker.validate_region(address, seed)?);
    }

    println!("\n--- Country aliases");
    for informal in ["US", "u.k.", "Holland", "Burma", "Eritrea"] {
        println!("  {informal} -> {}", canonical_country(informal));
    }

    Ok(())
}
