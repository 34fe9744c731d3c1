//! Tests for badge composition and ordering.

use crate::badges::{Badge, BadgeInputs, compose};
use crate::repo::GhRepo;
use std::collections::BTreeMap;

fn gh() -> GhRepo {
    GhRepo {
        host: "github.com".into(),
        user: "user".into(),
        repo: "repo".into(),
    }
}

fn node_engines() -> BTreeMap<String, String> {
    let mut engines = BTreeMap::new();
    engines.insert("node".to_string(), "14".to_string());
    engines
}

#[test]
fn always_present_badges_only() {
    let engines = BTreeMap::new();
    let inputs = BadgeInputs {
        name: "my-pkg",
        style: "flat-square",
        travis: false,
        xo: false,
        engines: &engines,
        gh: None,
    };
    let list = compose(&inputs, &[]);
    let titles: Vec<_> = list.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Version", "Downloads"]);
    assert!(list[0].image.contains("npm/v/my-pkg"));
    assert!(list[0].image.contains("style=flat-square"));
    assert!(list[1].image.contains("npm/dm/my-pkg"));
}

#[test]
fn full_ordering_with_override_last() {
    let engines = node_engines();
    let repo = gh();
    let inputs = BadgeInputs {
        name: "my-pkg",
        style: "flat-square",
        travis: true,
        xo: true,
        engines: &engines,
        gh: Some(&repo),
    };
    let custom = Badge {
        title: "Custom".into(),
        image: "https://example.com/badge.svg".into(),
        link: "https://example.com".into(),
    };
    let list = compose(&inputs, std::slice::from_ref(&custom));
    let titles: Vec<_> = list.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Travis", "XO code style", "Node", "Version", "Downloads", "Custom"]
    );
    assert_eq!(list.last(), Some(&custom));
}

#[test]
fn travis_badge_embeds_parsed_repository() {
    let engines = BTreeMap::new();
    let repo = gh();
    let inputs = BadgeInputs {
        name: "my-pkg",
        style: "flat",
        travis: true,
        xo: false,
        engines: &engines,
        gh: Some(&repo),
    };
    let list = compose(&inputs, &[]);
    assert_eq!(list[0].image, "https://img.shields.io/travis/user/repo.svg?style=flat");
    assert_eq!(list[0].link, "https://travis-ci.org/user/repo");
}

#[test]
fn travis_without_parsed_repository_is_skipped() {
    let engines = BTreeMap::new();
    let inputs = BadgeInputs {
        name: "my-pkg",
        style: "flat-square",
        travis: true,
        xo: false,
        engines: &engines,
        gh: None,
    };
    let titles: Vec<_> = compose(&inputs, &[]).iter().map(|b| b.title.clone()).collect();
    assert_eq!(titles, vec!["Version", "Downloads"]);
}

#[test]
fn node_badge_requires_node_engine() {
    let mut engines = BTreeMap::new();
    engines.insert("atom".to_string(), "*".to_string());
    let inputs = BadgeInputs {
        name: "my-pkg",
        style: "flat-square",
        travis: false,
        xo: false,
        engines: &engines,
        gh: None,
    };
    let titles: Vec<_> = compose(&inputs, &[]).iter().map(|b| b.title.clone()).collect();
    assert!(!titles.contains(&"Node".to_string()));
}
