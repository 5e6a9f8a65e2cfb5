pub mod cli;
pub mod config;
pub mod error;
pub mod version;

pub use version::{
    DEFAULT_FALLBACK_KEYS, VersionItem, VersionSource, compare, compare_ordering,
    is_at_least, latest, latest_with_keys, normalize, sort_versions,
};
