//! Discovery of ancillary project files: documentation, example, and usage
//! snippets.
//!
//! Discovery is candidate-driven. A set of base names is expanded against a
//! set of extensions with [`with_extensions`], and [`find_up`] resolves the
//! first candidate that exists, walking upward from the working directory.
//! Resolved snippet content is normalized with [`crate::text::clean`] before
//! it enters the rendering context.

use crate::core::MkreadmeError;
use crate::text;
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Documentation file candidates, probed in order.
const DOC_BASES: &[&str] = &["docs", "documentation", "doc", "usage"];
const DOC_EXTENSIONS: &[&str] = &["md"];

/// Example file candidates, probed in order.
const EXAMPLE_BASES: &[&str] = &["example"];
const EXAMPLE_EXTENSIONS: &[&str] = &["js", "sh", "md", "vue", "ts"];

/// Usage file candidates, probed in order.
const USAGE_BASES: &[&str] = &["usage"];
const USAGE_EXTENSIONS: &[&str] = &["sh", "bash"];

/// A block of file content destined for a fenced code section in the
/// rendered README.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Snippet {
    /// Language tag, taken from the resolved file's extension.
    pub language: String,
    /// Normalized file content.
    pub content: String,
}

/// Expand base names against extensions, grouped by extension first.
///
/// All bases for the first extension come before any base for the second,
/// so the extension order sets discovery priority when the result is handed
/// to [`find_up`].
///
/// # Examples
///
/// ```
/// use mkreadme::discover::with_extensions;
///
/// let candidates = with_extensions(&["a", "b"], &["js", "md"]);
/// assert_eq!(candidates, vec!["a.js", "b.js", "a.md", "b.md"]);
/// ```
#[must_use]
pub fn with_extensions(bases: &[&str], extensions: &[&str]) -> Vec<String> {
    let mut combined = Vec::with_capacity(bases.len() * extensions.len());
    for ext in extensions {
        for base in bases {
            combined.push(format!("{base}.{ext}"));
        }
    }
    combined
}

/// Resolve the first existing file among `candidates`, searching `start`
/// and then each of its ancestors.
///
/// At every directory level the candidates are tried in order, so the
/// candidate list encodes priority. Returns `None` when nothing matches
/// anywhere up the tree.
#[must_use]
pub fn find_up(start: &Path, candidates: &[String]) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        for candidate in candidates {
            let path = current.join(candidate);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "resolved candidate file");
                return Some(path);
            }
        }
        dir = current.parent();
    }
    None
}

fn self_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches require('./'), require("."), import x from './' and similar
    // relative self-references.
    RE.get_or_init(|| {
        Regex::new(r#"(?P<head>require\(\s*|from\s+)(?P<quote>['"])\.{1,2}/?(?P<close>['"])"#)
            .expect("valid self-import regex")
    })
}

/// Rewrite relative self-imports in example content to reference the
/// package by name, turning `require('./')` into `require('<name>')`.
#[must_use]
pub fn rewrite_self_imports(content: &str, package_name: &str) -> String {
    self_import()
        .replace_all(content, |caps: &regex::Captures<'_>| {
            format!(
                "{}{}{package_name}{}",
                &caps["head"], &caps["quote"], &caps["close"]
            )
        })
        .into_owned()
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        MkreadmeError::FileRead {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

fn snippet_from(path: &Path) -> Result<Snippet> {
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string();
    let content = text::clean(&read_file(path)?);
    Ok(Snippet { language, content })
}

/// Resolve the project's example file, rewriting self-imports to use the
/// package name. Returns `None` when no candidate exists.
pub fn resolve_example(start: &Path, package_name: &str) -> Result<Option<Snippet>> {
    let candidates = with_extensions(EXAMPLE_BASES, EXAMPLE_EXTENSIONS);
    match find_up(start, &candidates) {
        Some(path) => {
            let mut snippet = snippet_from(&path)?;
            snippet.content = rewrite_self_imports(&snippet.content, package_name);
            Ok(Some(snippet))
        }
        None => Ok(None),
    }
}

/// Resolve the project's usage file. Returns `None` when no candidate
/// exists.
pub fn resolve_usage(start: &Path) -> Result<Option<Snippet>> {
    let candidates = with_extensions(USAGE_BASES, USAGE_EXTENSIONS);
    match find_up(start, &candidates) {
        Some(path) => Ok(Some(snippet_from(&path)?)),
        None => Ok(None),
    }
}

/// Resolve the path of the project's documentation file, if any. The
/// content is read later by the documentation resolver, which also accepts
/// URLs and inline values.
#[must_use]
pub fn resolve_documentation_path(start: &Path) -> Option<PathBuf> {
    let candidates = with_extensions(DOC_BASES, DOC_EXTENSIONS);
    find_up(start, &candidates)
}

/// Read and normalize a documentation file referenced by path.
pub fn read_documentation(path: &Path) -> Result<String> {
    Ok(text::clean(&read_file(path)?))
}
