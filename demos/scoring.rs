//! Scoring example for addrcheck-rs
//!
//! Scores an address against a saved geocoder response, or against the live
//! geocoder when no file is given:
//!
//! ```text
//! cargo run --example scoring -- "9, Beleza Street, Asmara, Eritrea" saved.json
//! ```

use addrcheck_core::geocode::{decode_results, score_details};
use addrcheck_core::prelude::*;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let address = args
        .next()
        .unwrap_or_else(|| "Bristol Pension, 9, Beleza Street, Asmara, Maekel Region, Eritrea".into());

    match args.next() {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            let results = decode_results(&bytes)
                .map_err(|e| AddrError::InvalidData(format!("{path}: {e}")))?;
            let report = score_details(&address, &results);
            for area in &report.areas {
                println!(
                    "  #{:<2} {:>8.1} m x {:>8.1} m = {:>12.1} m²",
                    area.index, area.width_m, area.height_m, area.area_m2
                );
            }
            println!("score {} ({} of {} passed)", report.score, report.filtered, results.len());
        }
        None => live(&address),
    }
    Ok(())
}

#[cfg(feature = "http")]
fn live(address: &str) {
    use addrcheck_core::geocode::NominatimClient;
    use addrcheck_core::GeocoderConfig;

    match NominatimClient::new(&GeocoderConfig::from_env()) {
        Ok(client) => println!("{}", check_with_geocoder(&client, address)),
        Err(e) => eprintln!("cannot build client: {e}"),
    }
}

#[cfg(not(feature = "http"))]
fn live(_address: &str) {
    eprintln!("built without 'http'; pass a saved response file");
}
