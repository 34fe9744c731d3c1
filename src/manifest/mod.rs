//! Package manifest parsing (`package.json`).
//!
//! The manifest is the authoritative project description. Loading is strict:
//! a missing file or invalid JSON aborts the run, since nothing downstream
//! can be built without it. Fields the generator does not use are ignored
//! rather than rejected.
//!
//! Two fields accept more than one JSON shape, mirroring how they appear in
//! the wild: `author` is either a plain string or `{name, url}`, and
//! `repository` is either a URL string or `{url}`. Both are modeled as
//! untagged enums so either form deserializes transparently.

use crate::core::MkreadmeError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The package author, as a plain string or a structured record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Author {
    /// Structured form: `{"name": "...", "url": "...", "email": "..."}`.
    Structured {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
    /// Free-form string, e.g. `"Jane Doe <jane@example.com>"`.
    Plain(String),
}

impl Author {
    /// The author's name, when the structured form provides one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Structured { name, .. } => Some(name),
            Self::Plain(_) => None,
        }
    }

    /// The author's URL, when the structured form provides one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Structured { url, .. } => url.as_deref(),
            Self::Plain(_) => None,
        }
    }

    /// Raw display value: the name for structured authors, the string
    /// itself otherwise.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Structured { name, .. } => name,
            Self::Plain(raw) => raw,
        }
    }
}

/// The `repository` field, as a URL string or a `{url}` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Repository {
    /// Object form: `{"url": "...", "type": "git"}`.
    Object {
        url: String,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// Plain URL or `user/repo` shorthand.
    Plain(String),
}

impl Repository {
    /// The repository URL regardless of shape.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Object { url, .. } => url,
            Self::Plain(url) => url,
        }
    }
}

/// Parsed `package.json`.
///
/// Dependency map values (version constraints) are never used downstream,
/// only the keys; they are still deserialized so malformed manifests fail
/// loudly at load time rather than mid-pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub license: Option<String>,
    pub repository: Option<Repository>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    pub engines: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    /// Non-standard field honored when present: a URL, a path, or inline
    /// markdown for the documentation section.
    pub documentation: Option<String>,
}

impl PackageManifest {
    /// Load and parse a manifest from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MkreadmeError::ManifestNotFound`] when the file does not
    /// exist, [`MkreadmeError::ManifestParse`] when the JSON is invalid,
    /// and [`MkreadmeError::MissingName`] when the required `name` field is
    /// empty or absent.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|_| MkreadmeError::ManifestNotFound {
            path: path.display().to_string(),
        })?;

        let manifest: Self =
            serde_json::from_str(&raw).map_err(|e| MkreadmeError::ManifestParse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if manifest.name.trim().is_empty() {
            return Err(MkreadmeError::MissingName.into());
        }

        tracing::debug!(name = %manifest.name, "loaded manifest");
        Ok(manifest)
    }

    /// Ordered dependency names (map values are discarded).
    #[must_use]
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies.keys().cloned().collect()
    }

    /// Ordered devDependency names.
    #[must_use]
    pub fn dev_dependency_names(&self) -> Vec<String> {
        self.dev_dependencies.keys().cloned().collect()
    }
}
