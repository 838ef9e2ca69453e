// crates/addrcheck-core/src/error.rs

//! Crate-wide error type.
//!
//! Only *infrastructure* failures live here. Classification outcomes
//! (an address that does not look like one, a region that does not match)
//! are plain `bool`s, and lookup misses are empty strings. Geocoder
//! transport failures are reported through
//! [`ScoreOutcome`](crate::geocode::ScoreOutcome) instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddrError {
    /// A dataset file or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The gazetteer could not be materialized. This is fatal for every
    /// gazetteer-backed operation and must not be mistaken for "no match".
    #[error("gazetteer load failed: {0}")]
    GazetteerLoad(String),
}

pub type Result<T> = std::result::Result<T, AddrError>;
