//! License attribution rules.
//!
//! MIT packages get an attribution line built from the author field; any
//! other license renders without attribution.

use crate::manifest::Author;
use serde::Serialize;

/// Display-ready license information for the template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LicenseInfo {
    /// The raw license identifier from the manifest, e.g. `"MIT"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Attribution text; a markdown link when the author has both a name
    /// and a URL, empty for non-MIT licenses.
    pub author_with_url: String,
}

/// Build license display information from the raw identifier and author.
///
/// For MIT (matched case-insensitively): an author with name and URL
/// becomes a linked name, a name alone is used bare, and a plain-string
/// author is used verbatim. Any other license gets an empty attribution so
/// the template renders no attribution line.
#[must_use]
pub fn resolve(kind: &str, author: Option<&Author>) -> LicenseInfo {
    let author_with_url = if kind.eq_ignore_ascii_case("mit") {
        match author {
            Some(author) => match (author.name(), author.url()) {
                (Some(name), Some(url)) => format!("[{name}]({url})"),
                (Some(name), None) => name.to_string(),
                _ => author.display().to_string(),
            },
            None => String::new(),
        }
    } else {
        String::new()
    };

    LicenseInfo {
        kind: kind.to_string(),
        author_with_url,
    }
}
