use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for addrcheck
#[derive(Debug, Parser)]
#[command(
    name = "addrcheck",
    version,
    about = "Plausibility, region and geocoder-confidence checks for postal addresses"
)]
pub struct CliArgs {
    /// Cities JSON (default: geonames_cities.json bundled with addrcheck-core)
    #[arg(long = "cities", global = true)]
    pub cities: Option<PathBuf>,

    /// Countries JSON (default: geonames_countries.json bundled with addrcheck-core)
    #[arg(long = "countries", global = true)]
    pub countries: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show gazetteer counts
    Stats,

    /// Check whether a string looks like a postal address
    Plausible {
        address: String,
    },

    /// Extract the gazetteer-confirmed city and country from an address
    Extract {
        address: String,
        /// Treat the last two comma segments as the country when they form a known alias
        #[arg(long = "two-part")]
        two_part: bool,
    },

    /// Validate that an address lies in a seed region (city, country or disputed region)
    Validate {
        generated: String,
        seed: String,
    },

    /// Compute bounding-box areas for a saved geocoder response (JSON array)
    Areas {
        results: PathBuf,
    },

    /// Score an address against a saved geocoder response, or ask the geocoder live
    Score {
        address: String,
        /// Saved geocoder response; without it the configured geocoder is queried
        #[arg(long = "results")]
        results: Option<PathBuf>,
    },

    /// Split a geocoder display_name into street, city and country
    Components {
        display_name: String,
    },

    /// Write a binary gazetteer snapshot
    BuildCache {
        out: PathBuf,
    },
}
