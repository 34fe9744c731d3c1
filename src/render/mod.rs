//! Template rendering.
//!
//! The renderer is deliberately thin: it serializes the finished
//! [`RenderContext`](crate::context::RenderContext) into a tera context,
//! registers the custom filters, renders, and runs the output through the
//! final normalization pass. Conditional sections and loops are plain tera
//! syntax in the template itself.

use crate::context::RenderContext;
use crate::core::MkreadmeError;
use crate::text;
use anyhow::Result;
use std::collections::HashMap;
use tera::{Context as TeraContext, Tera, Value};

/// The built-in README template, overridable with `--template`.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/readme.md.tera");

/// Turn a package name into a display title: separators become spaces and
/// each word is capitalized (`my-pkg` → `My Pkg`).
fn beautify(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("beautify expects a string"))?;
    let pretty = name
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Value::String(pretty))
}

/// Render `template` against `context`, normalizing the result.
///
/// # Errors
///
/// Returns [`MkreadmeError::Template`] when the context cannot be
/// serialized or the template fails to render.
pub fn render(template: &str, context: &RenderContext) -> Result<String> {
    let tera_context = TeraContext::from_serialize(context).map_err(|e| {
        MkreadmeError::Template {
            reason: e.to_string(),
        }
    })?;

    // Fresh instance per render; registration is cheap and keeps renders
    // independent.
    let mut tera = Tera::default();
    tera.register_filter("beautify", beautify);

    let rendered = tera
        .render_str(template, &tera_context)
        .map_err(|e| MkreadmeError::Template {
            reason: format!("{e:#}"),
        })?;

    Ok(text::clean(&rendered))
}

#[cfg(test)]
mod render_tests;
