//! Tests for dependency metadata resolution with a stubbed transport.

use crate::registry::{MetadataSource, PACKAGE_HOST, PackageInfo, fetch_all};
use anyhow::anyhow;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Stub source: known names resolve to canned metadata, everything else
/// fails like a network error would.
struct StubSource {
    responses: HashMap<String, Value>,
}

impl StubSource {
    fn new(entries: &[(&str, Value)]) -> Self {
        Self {
            responses: entries
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        }
    }
}

impl MetadataSource for StubSource {
    async fn fetch(&self, name: &str) -> anyhow::Result<Value> {
        self.responses
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found"))
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn failure_degrades_to_bare_record_without_affecting_siblings() {
    let source = StubSource::new(&[(
        "chalk",
        json!({"description": "Terminal string styling", "version": "5.3.0"}),
    )]);

    let resolved = fetch_all(&source, &names(&["left-pad", "chalk"]), false).await;
    assert_eq!(resolved.len(), 2);

    // Order matches input order, not completion order.
    assert_eq!(resolved[0].name, "left-pad");
    assert_eq!(resolved[0].repository, format!("{PACKAGE_HOST}/left-pad"));
    assert!(resolved[0].metadata.is_empty());

    assert_eq!(resolved[1].name, "chalk");
    assert_eq!(resolved[1].repository, format!("{PACKAGE_HOST}/chalk"));
    assert_eq!(
        resolved[1].metadata.get("description"),
        Some(&json!("Terminal string styling"))
    );
}

#[tokio::test]
async fn computed_fields_win_over_fetched_ones() {
    let source = StubSource::new(&[(
        "chalk",
        json!({"name": "not-chalk", "repository": {"url": "elsewhere"}, "homepage": "h"}),
    )]);

    let resolved = fetch_all(&source, &names(&["chalk"]), false).await;
    assert_eq!(resolved[0].name, "chalk");
    assert_eq!(resolved[0].repository, format!("{PACKAGE_HOST}/chalk"));
    assert!(!resolved[0].metadata.contains_key("name"));
    assert!(!resolved[0].metadata.contains_key("repository"));
    assert_eq!(resolved[0].metadata.get("homepage"), Some(&json!("h")));
}

#[tokio::test]
async fn non_object_metadata_degrades() {
    let source = StubSource::new(&[("weird", json!("just a string"))]);
    let resolved = fetch_all(&source, &names(&["weird"]), false).await;
    assert!(resolved[0].metadata.is_empty());
}

#[tokio::test]
async fn offline_skips_fetching_entirely() {
    let source = StubSource::new(&[("chalk", json!({"description": "d"}))]);
    let resolved = fetch_all(&source, &names(&["chalk"]), true).await;
    assert_eq!(resolved[0], PackageInfo::bare("chalk"));
}

#[tokio::test]
async fn empty_input_is_empty_output() {
    let source = StubSource::new(&[]);
    assert!(fetch_all(&source, &[], false).await.is_empty());
}

#[test]
fn serialization_flattens_metadata() {
    let mut info = PackageInfo::bare("chalk");
    info.metadata
        .insert("description".to_string(), json!("styling"));
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["name"], "chalk");
    assert_eq!(value["description"], "styling");
    assert_eq!(value["repository"], format!("{PACKAGE_HOST}/chalk"));
}
