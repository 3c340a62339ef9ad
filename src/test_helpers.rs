//! Shared test utilities.
//!
//! Markup lookups that panic with a clear message on miss, plus a source
//! directory fixture for filesystem tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = source_with_config(r#"[cta]
//! variant = "dark""#);
//! let config = load_config(source.path()).unwrap();
//!
//! let html = render_page(&config, &[], &assets, 2025).into_string();
//! assert!(section_body(&html, "FAQ").contains("Loading..."));
//! ```

use std::fs;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp source directory containing `config.toml` with `content`.
pub fn source_with_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), content).unwrap();
    tmp
}

// =========================================================================
// Markup lookups: panic with a clear message on miss
// =========================================================================

/// Inner markup of the `<section aria-label="{label}">` wrapper, up to the
/// first closing `</section>`. Panics if no such section exists.
pub fn section_body<'a>(html: &'a str, label: &str) -> &'a str {
    let open = format!(r#"<section aria-label="{label}""#);
    let Some(start) = html.find(&open) else {
        panic!(
            "section '{label}' not found. Available: {:?}",
            section_labels(html)
        )
    };
    let rest = &html[start..];
    let body_start = rest.find('>').map(|i| i + 1).unwrap_or(0);
    let body_end = rest.find("</section>").unwrap_or(rest.len());
    &rest[body_start..body_end]
}

/// Labels of every `<section aria-label=...>` in document order.
pub fn section_labels(html: &str) -> Vec<&str> {
    html.split(r#"<section aria-label=""#)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .collect()
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert that every needle occurs in `html`, each after the previous one.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match html[cursor..].find(needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => {
                let anywhere = html.contains(needle);
                panic!(
                    "'{needle}' not found after byte {cursor} (present elsewhere: {anywhere})"
                )
            }
        }
    }
}
