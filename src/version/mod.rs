//! Loose version handling
//!
//! Normalizes, compares and selects version strings that may carry arbitrary
//! prefixes (`v`, `version `, `release-`) and any number of numeric segments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Latest    │────▶│   Compare   │────▶│  Normalize  │────▶│  Segments   │
//! │  (select)   │     │ (at_least)  │     │  (prefix)   │     │  (numeric)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalize`]: Strips whitespace and leading non-digit characters
//! - [`segments`]: Splits a normalized version into numeric segments of any size
//! - [`compare`]: Zero-padded segment comparison and the at-least check
//! - [`latest`]: Latest version selection over strings or records

pub mod compare;
pub mod latest;
pub mod normalize;
pub mod segments;

pub use compare::{compare, compare_ordering, is_at_least, sort_versions};
pub use latest::{DEFAULT_FALLBACK_KEYS, VersionItem, VersionSource, latest, latest_with_keys};
pub use normalize::normalize;
pub use segments::{Segment, parse_segments};
