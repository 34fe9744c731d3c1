//! Optional local override config (`.mkreadme.json`).
//!
//! The override config carries a subset of manifest fields plus
//! generator-specific settings (badge style, extra badges, related
//! packages, feature toggles). Values present here take precedence over the
//! manifest during context building. A missing file is not an error; an
//! unreadable or malformed file is, since silently ignoring explicit user
//! configuration would be worse.

use crate::badges::Badge;
use crate::core::MkreadmeError;
use crate::manifest::{Author, Repository};
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// File name probed at the working directory.
pub const CONFIG_FILE: &str = ".mkreadme.json";

/// Badge settings from the override config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BadgeOverrides {
    /// Shields.io style, e.g. `"flat-square"` or `"flat"`.
    pub style: Option<String>,
    /// Extra badges appended after the computed ones.
    pub list: Vec<Badge>,
}

/// Parsed override config. Every field is optional; `None` means "defer to
/// the manifest or the default".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    pub description: Option<String>,
    pub author: Option<Author>,
    pub license: Option<String>,
    pub repository: Option<Repository>,
    pub documentation: Option<String>,
    pub badges: Option<BadgeOverrides>,
    /// Related package names, resolved through the registry like
    /// dependencies.
    pub related: Vec<String>,
    pub travis: Option<bool>,
    pub xo: Option<bool>,
    pub atom: Option<bool>,
    pub write: Option<bool>,
}

impl OverrideConfig {
    /// Load the override config from `dir`, returning `None` when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`MkreadmeError::ConfigParse`] when the file exists but is
    /// not valid JSON.
    pub fn load_optional(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no override config");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| MkreadmeError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| MkreadmeError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded override config");
        Ok(Some(config))
    }
}
