//! mkreadme - README generation from package manifests
//!
//! `mkreadme` builds a README document for an npm-style project from its
//! `package.json` plus ancillary files discovered on disk: usage examples,
//! documentation snippets, and CI configuration. The manifest is enriched
//! with derived facts (status badges, dependency descriptions, license
//! attribution) and rendered through a text template.
//!
//! # Pipeline
//!
//! ```text
//! package.json + .mkreadme.json + flags
//!         │
//!         ▼
//!   ContextBuilder ──► file discovery, license resolution,
//!         │            badge composition, registry fetches
//!         ▼
//!   RenderContext ──► tera template ──► normalized text ──► stdout
//! ```
//!
//! The heart of the crate is [`context::ContextBuilder`], which merges the
//! manifest, the optional `.mkreadme.json` override config, and CLI flags
//! in a fixed precedence order and applies each enrichment step in
//! sequence. Everything around it is deliberately thin.
//!
//! # Core Modules
//!
//! - [`manifest`] - `package.json` parsing, including string-or-object
//!   author and repository shapes
//! - [`config`] - optional `.mkreadme.json` override config
//! - [`context`] - ordered merge and enrichment into the rendering context
//! - [`discover`] - candidate expansion and upward file discovery for
//!   example/usage/documentation snippets
//! - [`registry`] - concurrent npm registry metadata fetches with
//!   per-package failure isolation
//!
//! # Supporting Modules
//!
//! - [`badges`] - status badge composition and ordering
//! - [`license`] - license attribution rules
//! - [`repo`] - repository URL parsing into host/user/repo
//! - [`render`] - tera rendering with custom filters
//! - [`text`] - blank-line and trailing-whitespace normalization
//! - [`cli`] - argument parsing and the single-command pipeline
//! - [`core`] - error types and top-level error reporting

pub mod badges;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod discover;
pub mod license;
pub mod manifest;
pub mod registry;
pub mod render;
pub mod repo;
pub mod text;
