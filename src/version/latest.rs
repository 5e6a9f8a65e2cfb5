//! Latest version selection
//!
//! Picks the greatest version from a collection whose elements are either
//! plain version strings or records carrying a version in one of their fields.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::version::compare::compare;

/// Fields probed, in order, when no key or extractor is given
pub const DEFAULT_FALLBACK_KEYS: &[&str] = &["version", "versionCode", "tag"];

/// An element that can carry a version string
///
/// Plain strings answer [`VersionItem::as_version`]; records answer
/// [`VersionItem::field`]. Absent, empty, `null`, `false` and numeric zero
/// values are all reported as missing.
pub trait VersionItem {
    /// The element itself, if it is a version string
    fn as_version(&self) -> Option<&str> {
        None
    }

    /// Value of the named field, if the element is a record that has it
    fn field(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// How to get a version string out of a record
pub enum VersionSource<'a, T> {
    /// Probe the fallback keys (`version`, `versionCode`, `tag` by default)
    Fallback,
    /// Read a named field
    Key(&'a str),
    /// Call a function on each element
    Extractor(&'a dyn Fn(&T) -> Option<String>),
}

impl<T> Default for VersionSource<'_, T> {
    fn default() -> Self {
        Self::Fallback
    }
}

impl<'a, T> From<&'a str> for VersionSource<'a, T> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

/// Find the latest version among `items`.
///
/// Returns the raw string of the greatest version (not normalized), or `None`
/// when no element yields a version. When several elements hold equal
/// versions the first one wins.
pub fn latest<T: VersionItem>(items: &[T], source: VersionSource<'_, T>) -> Option<String> {
    latest_with_keys(items, source, DEFAULT_FALLBACK_KEYS)
}

/// Same as [`latest`], probing `fallback_keys` instead of the default keys
pub fn latest_with_keys<T: VersionItem, K: AsRef<str>>(
    items: &[T],
    source: VersionSource<'_, T>,
    fallback_keys: &[K],
) -> Option<String> {
    let mut best: Option<Cow<'_, str>> = None;

    for (index, item) in items.iter().enumerate() {
        let Some(candidate) = extract(item, &source, fallback_keys) else {
            debug!("Skipping item {} without a version", index);
            continue;
        };

        let is_better = match &best {
            None => true,
            Some(current) => compare(Some(&*candidate), Some(&**current)) > 0,
        };
        if is_better {
            best = Some(candidate);
        }
    }

    best.map(Cow::into_owned)
}

fn extract<'i, T: VersionItem, K: AsRef<str>>(
    item: &'i T,
    source: &VersionSource<'_, T>,
    fallback_keys: &[K],
) -> Option<Cow<'i, str>> {
    let candidate = match (item.as_version(), source) {
        (Some(version), _) => Some(Cow::Borrowed(version)),
        (None, VersionSource::Extractor(extractor)) => extractor(item).map(Cow::Owned),
        (None, VersionSource::Key(key)) if !key.is_empty() => item.field(key),
        (None, _) => fallback_keys
            .iter()
            .find_map(|key| item.field(key.as_ref()).filter(|v| !v.is_empty())),
    };

    candidate.filter(|v| !v.is_empty())
}

impl VersionItem for str {
    fn as_version(&self) -> Option<&str> {
        Some(self)
    }
}

impl VersionItem for String {
    fn as_version(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: VersionItem + ?Sized> VersionItem for &T {
    fn as_version(&self) -> Option<&str> {
        (**self).as_version()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

impl VersionItem for Value {
    fn as_version(&self) -> Option<&str> {
        self.as_str()
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_object()?.field(key)
    }
}

impl VersionItem for Map<String, Value> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => number_text(n).map(Cow::Owned),
            _ => None,
        }
    }
}

/// Decimal form of a number field; integral floats drop the fraction
fn number_text(n: &Number) -> Option<String> {
    match n.as_f64() {
        Some(f) if f == 0.0 => None,
        Some(f) if n.is_f64() && f.fract() == 0.0 => Some(format!("{f:.0}")),
        _ => Some(n.to_string()),
    }
}

impl<S: BuildHasher> VersionItem for HashMap<String, String, S> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl VersionItem for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_str()))
    }
}
