//! Command-line interface.
//!
//! `mkreadme` is a single-command tool: it reads `package.json` at the
//! working directory, builds the rendering context, renders the README
//! template, prints the result to standard output, and optionally writes
//! `README.md`.
//!
//! Flag semantics follow the merge rules of the context builder: `--travis`,
//! `--xo`, and `--write` force-enable their toggles, and leaving a flag off
//! never disables a toggle enabled by the manifest, the override config, or
//! a marker file.

use crate::config::OverrideConfig;
use crate::context::{CliFlags, ContextBuilder};
use crate::core::MkreadmeError;
use crate::manifest::PackageManifest;
use crate::registry::HttpRegistry;
use crate::render;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// File the rendered README is written to with `--write`.
pub const README_FILE: &str = "README.md";

/// Manifest file read at the working directory.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Parser, Debug)]
#[command(name = "mkreadme")]
#[command(version)]
#[command(about = "Generate a README.md from package.json and discovered project files")]
pub struct Cli {
    /// Force-enable the Travis CI badge.
    #[arg(long)]
    pub travis: bool,

    /// Force-enable the XO code style badge.
    #[arg(long)]
    pub xo: bool,

    /// Also write the rendered README to README.md (overwrites).
    #[arg(short, long)]
    pub write: bool,

    /// Render a custom template file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Skip registry fetches; dependency records carry only name and
    /// repository URL.
    #[arg(long, env = "MKREADME_OFFLINE")]
    pub offline: bool,

    /// Enable debug logging on standard error.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging entirely.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Logging configuration derived from the CLI flags, separated out so tests
/// can exercise the mapping without parsing arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log directive; `None` disables logging. `RUST_LOG` always
    /// wins when set.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the tracing subscriber. Logs go to standard error; standard
    /// output is reserved for the rendered README.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
            }
            None => EnvFilter::new("off"),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    }
}

impl Cli {
    /// Map verbosity flags to a logging configuration.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };
        CliConfig { log_level }
    }

    /// Run the full pipeline: load, build, render, emit.
    pub async fn execute(self) -> Result<()> {
        self.build_config().init_logging();

        let cwd = std::env::current_dir().context("failed to resolve working directory")?;
        let manifest = PackageManifest::load(&cwd.join(MANIFEST_FILE))?;
        let config = OverrideConfig::load_optional(&cwd)?;

        let flags = CliFlags {
            travis: self.travis,
            xo: self.xo,
            write: self.write,
        };

        let registry = HttpRegistry::new();
        let context = ContextBuilder::new(&cwd, manifest, config, flags, &registry, self.offline)
            .build()
            .await?;

        let template = match &self.template {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|source| MkreadmeError::FileRead {
                    path: path.display().to_string(),
                    source,
                })?
            }
            None => render::DEFAULT_TEMPLATE.to_string(),
        };

        let write = context.write;
        let rendered = render::render(&template, &context)?;

        println!("{rendered}");

        if write {
            let path = cwd.join(README_FILE);
            std::fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote README");
        }

        Ok(())
    }
}
