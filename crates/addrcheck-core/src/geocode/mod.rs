// crates/addrcheck-core/src/geocode/mod.rs

//! # Geocoding Confidence Scorer
//!
//! Turns a geocoder's result set into a discrete confidence [`Score`]:
//! results are gated by rank, name and house-number agreement, then the
//! summed bounding-box area (in m²) is bucketed. Small boxes mean the
//! geocoder pinned the address down precisely.

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod client;
mod score;

pub use client::{check_with_geocoder, decode_results, GeocodeError, Geocoder};
#[cfg(feature = "http")]
pub use client::NominatimClient;
pub use score::{compute_bounding_box_areas_meters, score, score_details, ScoreReport};
pub use score::{LAT_METERS_PER_DEGREE, MIN_PLACE_RANK};

/// One geocoder record. Only the fields the scorer reads are typed; the
/// rest is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// `[south, north, west, east]`, as strings or numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundingbox: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl GeocodeResult {
    /// The parsed bounding box, or `None` when it is missing or malformed.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_value(self.boundingbox.as_ref()?)
    }

    pub fn place_rank(&self) -> i64 {
        self.place_rank.unwrap_or(0)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }
}

/// A south/north/west/east rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    /// Parses `[south, north, west, east]`. Elements may be numbers or
    /// numeric strings; anything else (or fewer than four finite values)
    /// yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() < 4 {
            return None;
        }
        let mut coords = [0.0f64; 4];
        for (slot, item) in coords.iter_mut().zip(items) {
            let v = match item {
                Value::Number(n) => n.as_f64()?,
                Value::String(s) => s.trim().parse::<f64>().ok()?,
                _ => return None,
            };
            if !v.is_finite() {
                return None;
            }
            *slot = v;
        }
        let [south, north, west, east] = coords;
        Some(Self::new(south, north, west, east))
    }
}

/// A bounding box with its metric dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxArea {
    pub bbox: BoundingBox,
    pub width_m: f64,
    pub height_m: f64,
    pub area_m2: f64,
    /// Position of the originating record in the input slice.
    pub index: usize,
}

/// Discrete confidence buckets, by summed bounding-box area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    /// 0.0: no results, or none passed the filter.
    NoMatch,
    /// 0.3: 100 000 m² or more.
    Coarse,
    /// 0.7: under 100 000 m².
    Neighbourhood,
    /// 0.8: under 10 000 m².
    Block,
    /// 0.9: under 1 000 m².
    Building,
    /// 1.0: under 100 m².
    Point,
}

impl Score {
    /// Buckets a total area, ascending thresholds, first match wins.
    pub fn from_total_area(area_m2: f64) -> Self {
        if area_m2 < 100.0 {
            Self::Point
        } else if area_m2 < 1_000.0 {
            Self::Building
        } else if area_m2 < 10_000.0 {
            Self::Block
        } else if area_m2 < 100_000.0 {
            Self::Neighbourhood
        } else {
            Self::Coarse
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::NoMatch => 0.0,
            Self::Coarse => 0.3,
            Self::Neighbourhood => 0.7,
            Self::Block => 0.8,
            Self::Building => 0.9,
            Self::Point => 1.0,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// What asking the geocoder produced. `Timeout` and `ApiError` mean the
/// question could not be asked; they are never folded into a 0.0 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Scored(Score),
    Timeout,
    ApiError(String),
}

impl ScoreOutcome {
    /// The numeric score, if one was computed.
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::Scored(s) => Some(*s),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scored(s) => write!(f, "{s}"),
            Self::Timeout => f.write_str("TIMEOUT"),
            Self::ApiError(_) => f.write_str("API_ERROR"),
        }
    }
}
