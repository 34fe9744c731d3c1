//! Dependency metadata resolution against the npm registry.
//!
//! Each dependency name is resolved to a [`PackageInfo`] record. Fetches
//! within one list run concurrently via [`futures::future::join_all`] and
//! results are collected positionally, so output order always matches input
//! order regardless of completion order. A failed fetch degrades to an
//! empty record instead of propagating: `name` and the computed
//! `repository` URL are always present, fetched metadata fields only on
//! success.
//!
//! The transport sits behind the [`MetadataSource`] trait so tests can
//! substitute a stub for the HTTP client.

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

/// Public npm registry endpoint.
pub const REGISTRY_BASE: &str = "https://registry.npmjs.org";

/// Host shortcut used for computed per-package repository URLs.
pub const PACKAGE_HOST: &str = "https://ghub.io";

/// One resolved dependency record.
///
/// `metadata` holds whatever the registry returned for the package's latest
/// version (description, homepage, version, ...). It is flattened into the
/// record on serialization, so templates address fields directly, e.g.
/// `dep.description`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageInfo {
    pub name: String,
    pub repository: String,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, Value>,
}

impl PackageInfo {
    /// The degraded record used for fetch failures and offline runs.
    #[must_use]
    pub fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            repository: format!("{PACKAGE_HOST}/{name}"),
            metadata: serde_json::Map::new(),
        }
    }
}

/// A source of published package metadata.
pub trait MetadataSource: Sync {
    /// Fetch metadata for one package name.
    fn fetch(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = anyhow::Result<Value>> + Send;
}

/// HTTP-backed [`MetadataSource`] querying `<base>/<name>/latest`.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(REGISTRY_BASE)
    }

    /// Use a non-default registry endpoint (tests, private mirrors).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for HttpRegistry {
    async fn fetch(&self, name: &str) -> anyhow::Result<Value> {
        let url = format!("{}/{name}/latest", self.base_url);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(value)
    }
}

/// Resolve every name in `names` into a [`PackageInfo`], concurrently.
///
/// With `offline` set, no fetches are issued and every record is degraded
/// to `{name, repository}`, the same shape a total fetch failure would
/// produce.
pub async fn fetch_all<S: MetadataSource>(
    source: &S,
    names: &[String],
    offline: bool,
) -> Vec<PackageInfo> {
    if offline {
        return names.iter().map(|name| PackageInfo::bare(name)).collect();
    }

    let futures: Vec<_> = names.iter().map(|name| fetch_one(source, name)).collect();
    join_all(futures).await
}

async fn fetch_one<S: MetadataSource>(source: &S, name: &str) -> PackageInfo {
    let mut info = PackageInfo::bare(name);
    match source.fetch(name).await {
        Ok(Value::Object(mut map)) => {
            // The computed name and repository always win over fetched
            // fields of the same key.
            map.remove("name");
            map.remove("repository");
            info.metadata = map;
        }
        Ok(other) => {
            tracing::warn!(name, "registry returned non-object metadata: {other}");
        }
        Err(e) => {
            tracing::warn!(name, "metadata fetch failed, using empty record: {e:#}");
        }
    }
    info
}

#[cfg(test)]
mod registry_tests;
