//! Text normalization applied to every block of external text entering the
//! rendering context, and to the fully rendered output.

use regex::Regex;
use std::sync::OnceLock;

fn blank_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid blank-line regex"))
}

/// Normalize a block of text.
///
/// Two rules, applied together:
/// 1. Any run of two or more consecutive blank lines collapses into exactly
///    one blank line.
/// 2. Trailing whitespace and newlines at the end of the text are stripped.
///
/// The operation is idempotent: `clean(clean(x)) == clean(x)`.
#[must_use]
pub fn clean(text: &str) -> String {
    let collapsed = blank_runs().replace_all(text, "\n\n");
    collapsed.trim_end().to_string()
}
