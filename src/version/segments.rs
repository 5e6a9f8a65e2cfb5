//! Dot-separated numeric segments of a normalized version string

use std::cmp::Ordering;

/// One numeric segment of any size.
///
/// Holds the significant digits of the token's leading digit run, without
/// leading zeros. Zero is the empty digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a>(&'a str);

impl<'a> Segment<'a> {
    pub const ZERO: Segment<'static> = Segment("");

    /// Read the leading digit run of a token; `0` when there is none
    pub fn parse(token: &'a str) -> Self {
        let end = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        Self(token[..end].trim_start_matches('0'))
    }

    /// Numeric value, or `None` when it does not fit in a `u64`
    pub fn value(&self) -> Option<u64> {
        if self.0.is_empty() {
            return Some(0);
        }
        self.0.parse().ok()
    }
}

impl Ord for Segment<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Segment<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a normalized version string into numeric segments.
///
/// Each `.`-separated token contributes the value of its leading digit run,
/// or `0` when the token does not start with a digit. The number of segments
/// is not limited to three, and segments are produced lazily from the left.
///
/// Examples:
/// - "1.2.3" -> [1, 2, 3]
/// - "1.7.1.10" -> [1, 7, 1, 10]
/// - "1.x.3rc1" -> [1, 0, 3]
pub fn parse_segments(normalized: &str) -> impl Iterator<Item = Segment<'_>> {
    normalized.split('.').map(Segment::parse)
}
