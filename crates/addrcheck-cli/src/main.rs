//! addrcheck: command-line interface for addrcheck-core
//!
//! Usage examples
//! --------------
//!
//! - Is this an address at all?
//!   $ addrcheck plausible "175-4 Street, Asmara, Maekel Region, Eritrea"
//!
//! - Which city/country does it name?
//!   $ addrcheck extract "some street 5, asmara, eritrea"
//!   $ addrcheck extract --two-part "15 Sejong-daero, Seoul, Korea, South"
//!
//! - Does it lie in the seed region?
//!   $ addrcheck validate "Avenue de Smara 14, Laayoune, Morocco" "Western Sahara"
//!
//! - How precisely does the geocoder place it?
//!   $ addrcheck score "9, Beleza Street, Asmara, Eritrea"
//!   $ addrcheck score "9, Beleza Street, Asmara, Eritrea" --results saved.json
//!
//! Data source
//! -----------
//!
//! By default the gazetteer bundled with `addrcheck-core` is used and a
//! binary snapshot is cached next to it. `--cities` / `--countries` point at
//! other geonames-style JSON files (`.gz` accepted).
//!
//! The live geocoder is configured through `ADDRCHECK_GEOCODER_URL`,
//! `ADDRCHECK_USER_AGENT` and `ADDRCHECK_TIMEOUT_SECS`.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use addrcheck_core::gazetteer::{
    default_data_dir, CachedJsonSource, JsonFileSource, DEFAULT_CITIES_FILE,
    DEFAULT_COUNTRIES_FILE,
};
use addrcheck_core::geocode::{compute_bounding_box_areas_meters, decode_results, score_details};
use addrcheck_core::{
    looks_like_address, parse_address_components, AddressChecker, GazetteerCache, GeocodeResult,
};
use anyhow::Context;
use clap::Parser;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose);

    // Explicit paths are read as-is; the bundled dataset gets a snapshot.
    let explicit = args.cities.is_some() || args.countries.is_some();
    let dir = default_data_dir();
    let json = JsonFileSource::new(
        args.cities.unwrap_or_else(|| dir.join(DEFAULT_CITIES_FILE)),
        args.countries.unwrap_or_else(|| dir.join(DEFAULT_COUNTRIES_FILE)),
    );

    let cache = if explicit {
        GazetteerCache::new(json)
    } else {
        GazetteerCache::new(CachedJsonSource::new(json))
    };
    let checker = AddressChecker::new(&cache);

    match args.command {
        Commands::Stats => {
            let stats = checker.gazetteer()?.stats();
            println!("Gazetteer statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Plausible { address } => {
            println!("{}", looks_like_address(&address));
        }

        Commands::Extract { address, two_part } => {
            let parsed = checker.extract(&address, two_part)?;
            if parsed.is_empty() {
                println!("No country recognized in: {address}");
            } else {
                println!("City: {}", display_or_dash(&parsed.city));
                println!("Country: {}", parsed.country);
            }
        }

        Commands::Validate { generated, seed } => {
            println!("{}", checker.validate_region(&generated, &seed)?);
        }

        Commands::Areas { results } => {
            let results = read_results(&results)?;
            let areas = compute_bounding_box_areas_meters(&results);
            println!("{}", serde_json::to_string_pretty(&areas)?);
        }

        Commands::Score { address, results } => match results {
            Some(path) => {
                let results = read_results(&path)?;
                let report = score_details(&address, &results);
                println!("Score: {}", report.score);
                println!("  Results: {} ({} passed filter)", results.len(), report.filtered);
                println!("  Total area: {:.1} m²", report.total_area_m2);
            }
            None => println!("{}", live_score(&address)?),
        },

        Commands::Components { display_name } => {
            let c = parse_address_components(&display_name);
            println!("Street: {}", c.street);
            println!("City: {}", c.city);
            println!("Country: {}", c.country);
        }

        Commands::BuildCache { out } => {
            let gz = checker.gazetteer()?;
            gz.save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            let stats = gz.stats();
            println!(
                "Wrote {} cities / {} countries to {}",
                stats.cities,
                stats.countries,
                out.display()
            );
        }
    }

    Ok(())
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn read_results(path: &Path) -> anyhow::Result<Vec<GeocodeResult>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode_results(&bytes).with_context(|| format!("decoding {}", path.display()))
}

#[cfg(feature = "http")]
fn live_score(address: &str) -> anyhow::Result<addrcheck_core::ScoreOutcome> {
    use addrcheck_core::geocode::{check_with_geocoder, NominatimClient};
    use addrcheck_core::GeocoderConfig;

    let config = GeocoderConfig::from_env();
    tracing::debug!(endpoint = %config.endpoint, "querying geocoder");
    let client = NominatimClient::new(&config)?;
    Ok(check_with_geocoder(&client, address))
}

#[cfg(not(feature = "http"))]
fn live_score(_address: &str) -> anyhow::Result<addrcheck_core::ScoreOutcome> {
    anyhow::bail!("built without the 'http' feature; pass --results <file>")
}

