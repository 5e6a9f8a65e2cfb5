//! Version string normalization
//!
//! Strips surrounding whitespace and any leading non-digit prefix:
//! - `v1.7.1` -> `1.7.1`
//! - `version 2.0` -> `2.0`
//! - `  1.2.3  ` -> `1.2.3`

use std::sync::LazyLock;

use regex::Regex;

/// Leading run of characters that are not ASCII digits
static LEADING_NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9]*").expect("valid prefix pattern"));

/// Normalize a raw version string.
///
/// Returns `None` for absent or empty input, and for input without any digit.
/// A returned string is never empty and always starts with an ASCII digit.
pub fn normalize(input: Option<&str>) -> Option<String> {
    let input = input.filter(|s| !s.is_empty())?;

    let cleaned = LEADING_NON_DIGITS.replace(input.trim(), "");
    if cleaned.is_empty() {
        return None;
    }

    Some(cleaned.into_owned())
}
