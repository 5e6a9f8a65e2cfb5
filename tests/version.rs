use std::borrow::Cow;

use rstest::rstest;
use serde_json::{Value, json};

use loose_version::{
    VersionItem, VersionSource, compare, is_at_least, latest, normalize, sort_versions,
};

#[rstest]
#[case("v", "1.2.3")]
#[case("version ", "2.0")]
#[case("release-", "10.4.1.7")]
#[case(">>> ", "0.1")]
fn normalize_removes_any_prefix(#[case] prefix: &str, #[case] version: &str) {
    let raw = format!("{prefix}{version}  ");
    assert_eq!(normalize(Some(&raw)).as_deref(), Some(version));
}

#[rstest]
#[case("1.2.3")]
#[case("v1.0")]
#[case("1.7.1.10")]
#[case("2024.01.15")]
fn compare_is_reflexive(#[case] version: &str) {
    assert_eq!(compare(Some(version), Some(version)), 0);
    assert!(is_at_least(Some(version), Some(version)));
}

#[rstest]
#[case("1.2.4", "1.2.3")]
#[case("1.7.1.10", "1.7.1.9")]
#[case("v2", "1.99")]
#[case("1.0.1", "1")]
fn compare_is_antisymmetric(#[case] greater: &str, #[case] lesser: &str) {
    assert!(compare(Some(greater), Some(lesser)) > 0);
    assert!(compare(Some(lesser), Some(greater)) < 0);
}

#[test]
fn compare_pads_missing_segments_with_zero() {
    assert_eq!(compare(Some("1.2"), Some("1.2.0")), 0);
    assert_eq!(compare(Some("v1.0"), Some("1.0.0")), 0);
}

#[test]
fn is_at_least_requires_a_target() {
    for version in [Some("1.0"), Some("99"), None] {
        assert!(!is_at_least(version, None));
    }
    assert!(is_at_least(Some("1.7.1"), Some("1.7.0")));
    assert!(!is_at_least(Some("1.6.9"), Some("1.7.0")));
}

#[test]
fn latest_of_strings() {
    let versions = vec![
        "1.0.0".to_string(),
        "1.7.1.10".to_string(),
        "1.7.1".to_string(),
    ];
    assert_eq!(
        latest(&versions, VersionSource::Fallback),
        Some("1.7.1.10".to_string())
    );
}

#[test]
fn latest_of_empty_collection_is_none() {
    let versions: Vec<String> = Vec::new();
    assert_eq!(latest(&versions, VersionSource::Fallback), None);
}

#[test]
fn latest_prefers_first_of_equal_versions() {
    let items = vec![
        json!({ "tag": "v1.2", "id": 1 }),
        json!({ "tag": "1.2.0", "id": 2 }),
        json!({ "tag": "v1.1", "id": 3 }),
    ];
    assert_eq!(
        latest(&items, VersionSource::Fallback),
        Some("v1.2".to_string())
    );
}

#[test]
fn latest_with_extractor_over_nested_records() {
    let items = vec![
        json!({ "meta": { "v": "3.0.0" } }),
        json!({ "meta": {} }),
        json!({ "meta": { "v": "3.1.0" } }),
    ];
    let extractor = |item: &Value| item["meta"]["v"].as_str().map(String::from);
    assert_eq!(
        latest(&items, VersionSource::Extractor(&extractor)),
        Some("3.1.0".to_string())
    );
}

/// A release record as returned by a hosting service
struct Release {
    tag_name: String,
    draft: bool,
}

impl VersionItem for Release {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "tag" if !self.draft => Some(Cow::Borrowed(self.tag_name.as_str())),
            _ => None,
        }
    }
}

#[test]
fn latest_over_custom_records() {
    let releases = vec![
        Release {
            tag_name: "v0.4.0".to_string(),
            draft: false,
        },
        Release {
            tag_name: "v0.6.0".to_string(),
            draft: true,
        },
        Release {
            tag_name: "v0.5.2".to_string(),
            draft: false,
        },
    ];

    assert_eq!(
        latest(&releases, VersionSource::Fallback),
        Some("v0.5.2".to_string())
    );

    let extractor = |r: &Release| Some(r.tag_name.clone());
    assert_eq!(
        latest(&releases, VersionSource::Extractor(&extractor)),
        Some("v0.6.0".to_string())
    );
}

#[test]
fn sort_versions_handles_many_segments() {
    let mut versions = vec!["1.7.1.10", "1.7.1.9", "v1.7", "1.7.1"];
    sort_versions(&mut versions);
    assert_eq!(versions, vec!["v1.7", "1.7.1", "1.7.1.9", "1.7.1.10"]);
}
