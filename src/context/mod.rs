//! Rendering context assembly.
//!
//! [`ContextBuilder`] merges the manifest, the optional override config,
//! CLI flags, and derived facts into one [`RenderContext`] through a fixed
//! sequence of steps. The order matters: repository parsing must precede
//! badge composition, file discovery must precede documentation resolution,
//! and flag merging must precede everything that reads the toggles.
//!
//! Merge precedence, lowest to highest: built-in defaults, manifest,
//! override config, marker-derived toggles, truthy CLI flags. CLI flags are
//! plain `bool`s that are only merged when set, so a flag left at `false`
//! can never clear a value enabled by an earlier layer.
//!
//! The finished context upholds one invariant: every field a template may
//! reference is either concretely populated or an explicit `None` / empty
//! collection. Nothing is left to missing-key lookups at render time.

use crate::badges::{self, Badge, BadgeInputs};
use crate::config::OverrideConfig;
use crate::discover::{self, Snippet};
use crate::license::{self, LicenseInfo};
use crate::manifest::{Author, PackageManifest};
use crate::registry::{self, MetadataSource, PackageInfo};
use crate::repo::GhRepo;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default shields.io badge style.
pub const DEFAULT_BADGE_STYLE: &str = "flat-square";

/// CI marker file checked at the working directory (existence only).
pub const TRAVIS_MARKER: &str = ".travis.yml";

/// Boolean CLI overrides. Only `true` values participate in the merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliFlags {
    pub travis: bool,
    pub xo: bool,
    pub write: bool,
}

/// Badge section of the context: style plus the composed, ordered list.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeSection {
    pub style: String,
    pub list: Vec<Badge>,
}

/// The fully merged, enriched object handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub name: String,
    pub description: String,
    pub author: Option<Author>,
    pub license: Option<LicenseInfo>,
    pub repository: Option<String>,
    pub gh: Option<GhRepo>,
    pub badges: BadgeSection,
    pub travis: bool,
    pub xo: bool,
    pub atom: bool,
    pub write: bool,
    pub engines: BTreeMap<String, String>,
    /// Effective test command; `None` when absent or when `scripts.test`
    /// is the conventional `echo` placeholder.
    pub test_command: Option<String>,
    /// Documentation section: a ready markdown link line, embedded file
    /// content, or whatever inline value the manifest/config supplied.
    pub documentation: Option<String>,
    pub example: Option<Snippet>,
    pub usage: Option<Snippet>,
    pub dependencies: Vec<PackageInfo>,
    pub dev_dependencies: Vec<PackageInfo>,
    pub related: Vec<PackageInfo>,
}

/// Builds a [`RenderContext`] from its inputs. See the module docs for the
/// step ordering.
pub struct ContextBuilder<'a, S> {
    dir: PathBuf,
    manifest: PackageManifest,
    config: Option<OverrideConfig>,
    flags: CliFlags,
    source: &'a S,
    offline: bool,
}

impl<'a, S: MetadataSource> ContextBuilder<'a, S> {
    pub fn new(
        dir: impl Into<PathBuf>,
        manifest: PackageManifest,
        config: Option<OverrideConfig>,
        flags: CliFlags,
        source: &'a S,
        offline: bool,
    ) -> Self {
        Self {
            dir: dir.into(),
            manifest,
            config,
            flags,
            source,
            offline,
        }
    }

    /// Run every enrichment step and return the finished context.
    pub async fn build(self) -> Result<RenderContext> {
        let Self {
            dir,
            manifest,
            config,
            flags,
            source,
            offline,
        } = self;
        let config = config.unwrap_or_default();

        // Steps 1-3: defaults, then manifest, then override config.
        let name = manifest.name.clone();
        let description = config
            .description
            .clone()
            .or_else(|| manifest.description.clone())
            .unwrap_or_default();
        let author = config.author.clone().or_else(|| manifest.author.clone());
        let license_id = config.license.clone().or_else(|| manifest.license.clone());
        let repository = config
            .repository
            .as_ref()
            .or(manifest.repository.as_ref())
            .map(|r| r.url().to_string());

        let (badge_style, badge_overrides) = match &config.badges {
            Some(overrides) => (
                overrides
                    .style
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BADGE_STYLE.to_string()),
                overrides.list.clone(),
            ),
            None => (DEFAULT_BADGE_STYLE.to_string(), Vec::new()),
        };

        // Steps 4-6: marker-derived toggles.
        let travis_marker = dir.join(TRAVIS_MARKER).is_file();
        let xo_dev_dep = manifest.dev_dependencies.contains_key("xo");
        let atom_engine = manifest.engines.contains_key("atom");

        // Step 7: truthy CLI flags merge last; a false flag never clears
        // an earlier true.
        let travis = config.travis.unwrap_or(false) || travis_marker || flags.travis;
        let xo = config.xo.unwrap_or(false) || xo_dev_dep || flags.xo;
        let atom = config.atom.unwrap_or(false) || atom_engine;
        let write = config.write.unwrap_or(false) || flags.write;

        tracing::debug!(travis, xo, atom, write, "resolved feature toggles");

        // Step 8: parse the repository; unparseable values mean no `gh`,
        // never an error.
        let gh = repository.as_deref().and_then(GhRepo::parse);

        // Step 9: discovered files.
        let example = discover::resolve_example(&dir, &name)?;
        let usage = discover::resolve_usage(&dir)?;
        let documentation = config
            .documentation
            .clone()
            .or_else(|| manifest.documentation.clone())
            .or_else(|| {
                discover::resolve_documentation_path(&dir).map(|p| p.display().to_string())
            });

        // Step 10: license attribution.
        let license = license_id
            .as_deref()
            .map(|id| license::resolve(id, author.as_ref()));

        // Step 11: documentation resolution (URL link line, file content,
        // or inline value).
        let documentation = match documentation {
            Some(value) => Some(resolve_documentation(&name, &value)?),
            None => None,
        };

        // Step 12: test script check.
        let test_command = effective_test_command(&manifest.scripts);

        // Step 13: badge composition.
        let badge_list = badges::compose(
            &BadgeInputs {
                name: &name,
                style: &badge_style,
                travis,
                xo,
                engines: &manifest.engines,
                gh: gh.as_ref(),
            },
            &badge_overrides,
        );

        // Step 14: dependency metadata, concurrent within each list, lists
        // sequential.
        let dependencies =
            registry::fetch_all(source, &manifest.dependency_names(), offline).await;
        let dev_dependencies =
            registry::fetch_all(source, &manifest.dev_dependency_names(), offline).await;
        let related = registry::fetch_all(source, &config.related, offline).await;

        Ok(RenderContext {
            name,
            description,
            author,
            license,
            repository,
            gh,
            badges: BadgeSection {
                style: badge_style,
                list: badge_list,
            },
            travis,
            xo,
            atom,
            write,
            engines: manifest.engines,
            test_command,
            documentation,
            example,
            usage,
            dependencies,
            dev_dependencies,
            related,
        })
    }
}

/// Resolve the documentation value per its shape: http(s) URLs become a
/// single markdown link line, paths are read and normalized, anything else
/// passes through unchanged.
fn resolve_documentation(name: &str, value: &str) -> Result<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(format!("[`{name} developer docs`]({value})"))
    } else if value.starts_with("./") || value.starts_with('/') {
        discover::read_documentation(Path::new(value))
    } else {
        Ok(value.to_string())
    }
}

/// The conventional npm placeholder (`echo "Error: no test specified"...`)
/// means there are no tests to run.
fn effective_test_command(scripts: &BTreeMap<String, String>) -> Option<String> {
    scripts
        .get("test")
        .filter(|cmd| !cmd.trim_start().starts_with("echo"))
        .cloned()
}
