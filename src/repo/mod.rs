//! Repository URL parsing.
//!
//! The manifest's `repository` field arrives in several shapes: full https
//! URLs (with or without a `git+` prefix or `.git` suffix), scp-style
//! `git@host:user/repo` strings, and `user/repo` shorthand. All of them
//! reduce to a host/user/repo triple. Anything unrecognized yields `None`
//! rather than an error, and downstream consumers (the Travis badge) are
//! simply skipped.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Parsed repository coordinates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GhRepo {
    pub host: String,
    pub user: String,
    pub repo: String,
}

fn url_form() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:git\+)?(?:https?|git|ssh)://(?:[^@/]+@)?(?P<host>[^/:]+)(?::\d+)?/(?P<user>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$",
        )
        .expect("valid repository URL regex")
    })
}

fn scp_form() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^git@(?P<host>[^:]+):(?P<user>[^/]+)/(?P<repo>.+?)(?:\.git)?$")
            .expect("valid scp-style regex")
    })
}

fn shorthand_form() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<user>[A-Za-z0-9_.-]+)/(?P<repo>[A-Za-z0-9_.-]+)$")
            .expect("valid shorthand regex")
    })
}

impl GhRepo {
    /// Parse a repository string into host/user/repo coordinates.
    ///
    /// `user/repo` shorthand assumes `github.com`. Returns `None` for
    /// anything that does not match a known shape.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(caps) = url_form().captures(input).or_else(|| scp_form().captures(input)) {
            return Some(Self {
                host: caps["host"].to_string(),
                user: caps["user"].to_string(),
                repo: caps["repo"].to_string(),
            });
        }

        shorthand_form().captures(input).map(|caps| Self {
            host: "github.com".to_string(),
            user: caps["user"].to_string(),
            repo: caps["repo"].to_string(),
        })
    }
}
