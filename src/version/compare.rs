//! Version comparison
//!
//! Versions are compared segment by segment after normalization. Missing
//! trailing segments count as zero, so `1.2` equals `1.2.0`.

use std::cmp::Ordering;

use tracing::debug;

use crate::version::normalize::normalize;
use crate::version::segments::{Segment, parse_segments};

/// Compare two version strings.
///
/// Returns a positive value if `a > b`, zero if equal, negative if `a < b`.
/// Only the sign is meaningful. A version that normalizes to nothing sorts
/// below any real version; two such versions are equal. Differences beyond
/// the `i64` range saturate.
pub fn compare(a: Option<&str>, b: Option<&str>) -> i64 {
    match (normalize(a), normalize(b)) {
        (None, None) => 0,
        (None, Some(_)) => -1,
        (Some(_), None) => 1,
        (Some(na), Some(nb)) => compare_normalized(&na, &nb),
    }
}

/// Same as [`compare`], expressed as an [`Ordering`]
pub fn compare_ordering(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare(a, b).cmp(&0)
}

/// Check if `version` is greater than or equal to `target`.
///
/// An absent or empty target is never satisfied.
pub fn is_at_least(version: Option<&str>, target: Option<&str>) -> bool {
    if target.is_none_or(str::is_empty) {
        return false;
    }
    compare(version, target) >= 0
}

/// Sort versions in ascending order. Equal versions keep their input order.
pub fn sort_versions<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by(|a, b| compare_ordering(Some(a.as_ref()), Some(b.as_ref())));
}

fn compare_normalized(a: &str, b: &str) -> i64 {
    let mut pa = parse_segments(a);
    let mut pb = parse_segments(b);

    loop {
        let (va, vb) = match (pa.next(), pb.next()) {
            (None, None) => return 0,
            (va, vb) => (va.unwrap_or(Segment::ZERO), vb.unwrap_or(Segment::ZERO)),
        };
        if va != vb {
            return difference(va, vb);
        }
    }
}

/// `a - b`, saturated to the `i64` range
fn difference(a: Segment<'_>, b: Segment<'_>) -> i64 {
    match (a.value(), b.value()) {
        (Some(a), Some(b)) => {
            let diff = i128::from(a) - i128::from(b);
            diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
        }
        _ => {
            debug!("Segment {:?} or {:?} exceeds u64, saturating", a, b);
            if a > b { i64::MAX } else { i64::MIN }
        }
    }
}
