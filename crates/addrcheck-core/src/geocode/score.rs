// crates/addrcheck-core/src/geocode/score.rs

use super::{BoundingBoxArea, GeocodeResult, Score};
use crate::text::digit_runs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Meters per degree of latitude (flat approximation).
pub const LAT_METERS_PER_DEGREE: f64 = 111_000.0;
/// Results ranked coarser than this (countries, cities, ...) are ignored.
pub const MIN_PLACE_RANK: i64 = 20;

/// Metric dimensions of every result that carries a usable bounding box.
/// Records without one are skipped.
pub fn compute_bounding_box_areas_meters(results: &[GeocodeResult]) -> Vec<BoundingBoxArea> {
    results
        .iter()
        .enumerate()
        .filter_map(|(index, result)| {
            let bbox = result.bounding_box()?;
            let center_lat = (bbox.south + bbox.north) / 2.0;
            let lon_meters_per_degree = LAT_METERS_PER_DEGREE * center_lat.to_radians().cos();
            let height_m = (bbox.north - bbox.south).abs() * LAT_METERS_PER_DEGREE;
            let width_m = (bbox.east - bbox.west).abs() * lon_meters_per_degree;
            Some(BoundingBoxArea {
                bbox,
                width_m,
                height_m,
                area_m2: width_m * height_m,
                index,
            })
        })
        .collect()
}

/// Everything [`score_details`] looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: Score,
    /// Results that passed the rank/name/number gate.
    pub filtered: usize,
    /// Sum of `areas[..].area_m2`.
    pub total_area_m2: f64,
    /// Areas of *all* results with a bounding box, filtered or not.
    pub areas: Vec<BoundingBoxArea>,
}

impl ScoreReport {
    fn no_match(filtered: usize) -> Self {
        Self {
            score: Score::NoMatch,
            filtered,
            total_area_m2: 0.0,
            areas: Vec::new(),
        }
    }
}

fn passes_filter(
    result: &GeocodeResult,
    address_lower: &str,
    query_numbers: &BTreeSet<String>,
) -> bool {
    if result.place_rank() < MIN_PLACE_RANK {
        return false;
    }

    let name = result.name();
    if !name.is_empty() && !address_lower.contains(&name.to_lowercase()) {
        return false;
    }

    if !query_numbers.is_empty() {
        let display_numbers = digit_runs(&result.display_name().to_lowercase());
        if &display_numbers != query_numbers {
            return false;
        }
    }
    true
}

/// Scores `results` for the query `address` and returns the working.
///
/// The filter only gates: once any result passes it, the area sum is taken
/// over every result with a bounding box, including ones the filter
/// rejected.
pub fn score_details(address: &str, results: &[GeocodeResult]) -> ScoreReport {
    if results.is_empty() {
        return ScoreReport::no_match(0);
    }

    let address_lower = address.to_lowercase();
    let query_numbers = digit_runs(&address_lower);

    let filtered = results
        .iter()
        .filter(|r| passes_filter(r, &address_lower, &query_numbers))
        .count();
    if filtered == 0 {
        tracing::debug!(address, total = results.len(), "no geocoder result passed the filter");
        return ScoreReport::no_match(0);
    }

    let areas = compute_bounding_box_areas_meters(results);
    if areas.is_empty() {
        return ScoreReport::no_match(filtered);
    }

    let total_area_m2: f64 = areas.iter().map(|a| a.area_m2).sum();
    ScoreReport {
        score: Score::from_total_area(total_area_m2),
        filtered,
        total_area_m2,
        areas,
    }
}

/// Discrete confidence score for `results` answering the query `address`.
///
/// 1. no results: [`Score::NoMatch`]
/// 2. keep results with `place_rank >= 20`, whose `name` (if any) occurs in
///    the address, and whose display name carries exactly the address's set
///    of digit runs (skipped when the address has none)
/// 3. nothing kept: [`Score::NoMatch`]
/// 4. sum the bounding-box areas of **all** results and bucket the total
pub fn score(address: &str, results: &[GeocodeResult]) -> Score {
    score_details(address, results).score
}
