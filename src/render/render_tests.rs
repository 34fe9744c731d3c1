//! Tests for template rendering against built contexts.

use crate::badges::Badge;
use crate::context::{BadgeSection, DEFAULT_BADGE_STYLE, RenderContext};
use crate::discover::Snippet;
use crate::license::LicenseInfo;
use crate::registry::PackageInfo;
use crate::render::{DEFAULT_TEMPLATE, render};
use std::collections::BTreeMap;

fn minimal_context(name: &str) -> RenderContext {
    RenderContext {
        name: name.to_string(),
        description: String::new(),
        author: None,
        license: None,
        repository: None,
        gh: None,
        badges: BadgeSection {
            style: DEFAULT_BADGE_STYLE.to_string(),
            list: Vec::new(),
        },
        travis: false,
        xo: false,
        atom: false,
        write: false,
        engines: BTreeMap::new(),
        test_command: None,
        documentation: None,
        example: None,
        usage: None,
        dependencies: Vec::new(),
        dev_dependencies: Vec::new(),
        related: Vec::new(),
    }
}

#[test]
fn minimal_context_renders_title_and_install() {
    let out = render(DEFAULT_TEMPLATE, &minimal_context("my-pkg")).unwrap();
    assert!(out.starts_with("# My Pkg"));
    assert!(out.contains("npm install my-pkg"));
    assert!(!out.contains("## Usage"));
    assert!(!out.contains("## License"));
    // Final normalization: no blank-line runs, no trailing whitespace.
    assert!(!out.contains("\n\n\n"));
    assert_eq!(out, out.trim_end());
}

#[test]
fn atom_packages_install_with_apm() {
    let mut ctx = minimal_context("my-pkg");
    ctx.atom = true;
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("apm install my-pkg"));
    assert!(!out.contains("npm install my-pkg"));
}

#[test]
fn badges_render_as_linked_images_in_order() {
    let mut ctx = minimal_context("p");
    ctx.badges.list = vec![
        Badge {
            title: "Version".into(),
            image: "https://img.shields.io/npm/v/p.svg".into(),
            link: "https://www.npmjs.com/package/p".into(),
        },
        Badge {
            title: "Downloads".into(),
            image: "https://img.shields.io/npm/dm/p.svg".into(),
            link: "https://www.npmjs.com/package/p".into(),
        },
    ];
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    let version = out.find("[![Version]").unwrap();
    let downloads = out.find("[![Downloads]").unwrap();
    assert!(version < downloads);
    assert!(out.contains("[![Version](https://img.shields.io/npm/v/p.svg)](https://www.npmjs.com/package/p)"));
}

#[test]
fn usage_and_example_sections_carry_language_fences() {
    let mut ctx = minimal_context("p");
    ctx.usage = Some(Snippet {
        language: "sh".into(),
        content: "p --help".into(),
    });
    ctx.example = Some(Snippet {
        language: "js".into(),
        content: "require('p')();".into(),
    });
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("```sh\np --help\n```"));
    assert!(out.contains("```js\nrequire('p')();\n```"));
}

#[test]
fn license_section_includes_attribution_when_present() {
    let mut ctx = minimal_context("p");
    ctx.license = Some(LicenseInfo {
        kind: "MIT".into(),
        author_with_url: "[A](U)".into(),
    });
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("MIT © [A](U)"));
}

#[test]
fn non_mit_license_renders_without_attribution() {
    let mut ctx = minimal_context("p");
    ctx.license = Some(LicenseInfo {
        kind: "Apache-2.0".into(),
        author_with_url: String::new(),
    });
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("Apache-2.0"));
    assert!(!out.contains('©'));
}

#[test]
fn dependencies_render_with_descriptions_when_fetched() {
    let mut ctx = minimal_context("p");
    let mut fetched = PackageInfo::bare("chalk");
    fetched
        .metadata
        .insert("description".into(), serde_json::json!("Terminal styling"));
    ctx.dependencies = vec![fetched, PackageInfo::bare("left-pad")];
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("- [chalk](https://ghub.io/chalk): Terminal styling"));
    assert!(out.contains("- [left-pad](https://ghub.io/left-pad)"));
    assert!(!out.contains("left-pad):"));
}

#[test]
fn test_command_drives_tests_section() {
    let mut ctx = minimal_context("p");
    ctx.test_command = Some("ava".into());
    let out = render(DEFAULT_TEMPLATE, &ctx).unwrap();
    assert!(out.contains("## Tests"));
    assert!(out.contains("npm test"));
}

#[test]
fn custom_templates_are_supported() {
    let ctx = minimal_context("my-pkg");
    let out = render("name: {{ name }}", &ctx).unwrap();
    assert_eq!(out, "name: my-pkg");
}

#[test]
fn invalid_template_is_a_template_error() {
    let err = render("{{ unclosed", &minimal_context("p")).unwrap_err();
    assert!(err.to_string().contains("template rendering failed"));
}
