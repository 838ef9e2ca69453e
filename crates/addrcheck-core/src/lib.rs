// crates/addrcheck-core/src/lib.rs

//! Heuristic checks for free-text postal addresses:
//!
//! - [`looks_like_address`]: is this string plausibly an address at all?
//! - [`extract_city_country`]: which gazetteer city/country does it name?
//! - [`validate_address_region`]: does it lie in the seed region?
//! - [`geocode::score`]: how precisely did a geocoder pin it down?
//!
//! Gazetteer-backed operations take a [`Gazetteer`] by reference; the
//! [`GazetteerCache`] loads one lazily, exactly once, from a
//! [`GazetteerSource`].

pub mod alias; // CountryAlias table
pub mod checker;
pub mod components; // display_name -> street/city/country
pub mod config;
pub mod error;
pub mod extract;
pub mod gazetteer;
pub mod geocode;
pub mod plausibility;
pub mod region;
pub mod text;

// Re-exports
pub use crate::alias::canonical_country;
pub use crate::checker::AddressChecker;
pub use crate::components::{parse_address_components, AddressComponents};
pub use crate::config::GeocoderConfig;
pub use crate::error::{AddrError, Result};
pub use crate::extract::{extract_city_country, ParsedRegion};
pub use crate::gazetteer::{
    Gazetteer, GazetteerCache, GazetteerCity, GazetteerCountry, GazetteerSource, GazetteerStats,
};
pub use crate::geocode::{
    BoundingBox, BoundingBoxArea, GeocodeError, GeocodeResult, Geocoder, Score, ScoreOutcome,
};
pub use crate::plausibility::looks_like_address;
pub use crate::region::validate_address_region;

pub mod prelude {
    pub use crate::gazetteer::{JsonFileSource, StaticSource};
    pub use crate::geocode::{check_with_geocoder, compute_bounding_box_areas_meters, score};
    pub use crate::{
        canonical_country, extract_city_country, looks_like_address, validate_address_region,
        AddrError, AddressChecker, Gazetteer, GazetteerCache, GeocodeResult, Geocoder, ParsedRegion,
        Result, Score, ScoreOutcome,
    };
}
