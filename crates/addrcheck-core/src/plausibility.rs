// crates/addrcheck-core/src/plausibility.rs

//! # Plausibility Classifier
//!
//! A conservative noise filter for free-text addresses. It is not a grammar:
//! short but legitimate addresses are expected to fail.

use crate::text::has_ascii_digit;
use std::collections::HashSet;

/// Alphanumeric length bounds, inclusive.
pub const MIN_ALNUM_LEN: usize = 30;
pub const MAX_ALNUM_LEN: usize = 300;
/// Minimum number of letters, any script.
pub const MIN_LETTERS: usize = 20;
/// Minimum number of distinct characters in the whole string.
pub const MIN_DISTINCT_CHARS: usize = 5;
/// Minimum number of commas.
pub const MIN_COMMAS: usize = 2;

/// Characters that never appear in a postal address.
pub const FORBIDDEN_CHARS: &[char] = &[
    '`', ':', '%', '\n', '@', '*', '^', '[', ']', '{', '}', '_', '«', '»',
];

/// Returns `true` if `address` looks like a postal address.
///
/// All checks run on the trimmed, lower-cased input and short-circuit:
///
/// 1. alphanumeric length within [`MIN_ALNUM_LEN`]..=[`MAX_ALNUM_LEN`]
/// 2. at least [`MIN_LETTERS`] letters
/// 3. at least one ASCII `a`-`z`
/// 4. at least [`MIN_DISTINCT_CHARS`] distinct characters
/// 5. some comma segment carries an ASCII digit (after dropping `-` and `;`)
/// 6. at least [`MIN_COMMAS`] commas
/// 7. none of [`FORBIDDEN_CHARS`]
///
/// ```rust
/// use addrcheck_core::looks_like_address;
///
/// assert!(looks_like_address("175-4 Street, Asmara, Maekel Region, Eritrea"));
/// assert!(!looks_like_address("Asmara, Eritrea"));
/// ```
pub fn looks_like_address(address: &str) -> bool {
    let address = address.trim().to_lowercase();

    let alnum_len = address.chars().filter(|c| c.is_alphanumeric()).count();
    if !(MIN_ALNUM_LEN..=MAX_ALNUM_LEN).contains(&alnum_len) {
        return false;
    }

    let letters = address.chars().filter(|c| c.is_alphabetic()).count();
    if letters < MIN_LETTERS {
        return false;
    }

    // Narrower than the letter count: pure CJK/Arabic input is rejected here.
    if !address.bytes().any(|b| b.is_ascii_lowercase()) {
        return false;
    }

    let distinct: HashSet<char> = address.chars().collect();
    if distinct.len() < MIN_DISTINCT_CHARS {
        return false;
    }

    let for_numbers: String = address.chars().filter(|c| *c != '-' && *c != ';').collect();
    if !for_numbers.split(',').any(has_ascii_digit) {
        return false;
    }

    if address.matches(',').count() < MIN_COMMAS {
        return false;
    }

    !address.contains(FORBIDDEN_CHARS)
}
