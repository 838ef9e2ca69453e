// crates/addrcheck-core/src/text.rs

//! Small text helpers shared by the classifier, extractor and scorer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("static pattern"));

/// Returns the set of maximal ASCII digit runs in `s` (`"12b 7, 12"` -> `{"12", "7"}`).
pub fn digit_runs(s: &str) -> BTreeSet<String> {
    DIGIT_RUN
        .find_iter(s)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if `s` contains at least one ASCII digit.
#[inline]
pub fn has_ascii_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Splits on commas and trims each segment. Empty segments are kept so that
/// segment positions stay meaningful.
pub fn segments(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).collect()
}
