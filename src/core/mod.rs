//! Core error types and the top-level error reporter.
//!
//! Classifiable failures get a [`MkreadmeError`] variant; everything else
//! travels as `anyhow::Error` with context attached at the call site. The
//! binary funnels both through [`report_error`] before exiting non-zero.

use colored::Colorize;
use thiserror::Error;

/// Domain errors the generator can classify.
#[derive(Debug, Error)]
pub enum MkreadmeError {
    /// The required manifest file does not exist. Fatal.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: String },

    /// The manifest exists but is not valid JSON. Fatal.
    #[error("failed to parse {path}: {reason}")]
    ManifestParse { path: String, reason: String },

    /// The manifest has no usable `name` field. Fatal.
    #[error("manifest field `name` must be a non-empty string")]
    MissingName,

    /// The override config exists but is not valid JSON.
    #[error("failed to parse {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    /// A discovered or referenced file could not be read.
    #[error("failed to read {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    Template { reason: String },
}

/// Print an error chain to standard error in user-facing form.
pub fn report_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "error:".red().bold());
}
