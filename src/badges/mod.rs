//! Status badge composition.
//!
//! Conditional badges (Travis, XO, Node engine) come first in evaluation
//! order, then the two always-present badges (Version, Downloads), then any
//! badges supplied by the override config appended last. The ordering is an
//! invariant the template relies on.

use crate::repo::GhRepo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single status badge: title, badge image URL, link target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub title: String,
    pub image: String,
    pub link: String,
}

/// Inputs the composer needs from the surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct BadgeInputs<'a> {
    pub name: &'a str,
    pub style: &'a str,
    pub travis: bool,
    pub xo: bool,
    pub engines: &'a BTreeMap<String, String>,
    pub gh: Option<&'a GhRepo>,
}

/// Compose the badge list for a project.
///
/// `overrides` holds badges supplied via the override config; they are
/// appended after the computed ones, never merged or reordered.
#[must_use]
pub fn compose(inputs: &BadgeInputs<'_>, overrides: &[Badge]) -> Vec<Badge> {
    let BadgeInputs {
        name,
        style,
        travis,
        xo,
        engines,
        gh,
    } = *inputs;

    let mut list = Vec::new();

    if travis {
        if let Some(gh) = gh {
            list.push(Badge {
                title: "Travis".to_string(),
                image: format!(
                    "https://img.shields.io/travis/{user}/{repo}.svg?style={style}",
                    user = gh.user,
                    repo = gh.repo
                ),
                link: format!(
                    "https://travis-ci.org/{user}/{repo}",
                    user = gh.user,
                    repo = gh.repo
                ),
            });
        } else {
            tracing::warn!("travis badge requested but repository could not be parsed, skipping");
        }
    }

    if xo {
        list.push(Badge {
            title: "XO code style".to_string(),
            image: format!("https://img.shields.io/badge/code%20style-XO-5ed9c7.svg?style={style}"),
            link: "https://github.com/sindresorhus/xo".to_string(),
        });
    }

    if engines.contains_key("node") {
        list.push(Badge {
            title: "Node".to_string(),
            image: format!("https://img.shields.io/node/v/{name}.svg?style={style}"),
            link: format!("https://www.npmjs.com/package/{name}"),
        });
    }

    list.push(Badge {
        title: "Version".to_string(),
        image: format!("https://img.shields.io/npm/v/{name}.svg?style={style}"),
        link: format!("https://www.npmjs.com/package/{name}"),
    });

    list.push(Badge {
        title: "Downloads".to_string(),
        image: format!("https://img.shields.io/npm/dm/{name}.svg?style={style}"),
        link: format!("https://www.npmjs.com/package/{name}"),
    });

    list.extend(overrides.iter().cloned());
    list
}

#[cfg(test)]
mod badges_tests;
