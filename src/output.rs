//! CLI output formatting.
//!
//! Output is an inventory of page content, not a list of files: every section
//! is shown by its position and name, with details (counts, titles, where it
//! was written) as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 Hero (4 images)
//!     Title: The significance of heritage and contemporary craft.
//! 002 Collections (4 items)
//!     001 Sofa → #sofa
//!     002 Chair → #chair
//! ...
//! 009 FAQ (6 items)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Stylesheet → style.1a2b3c4d.css
//! Script → site.5e6f7a8b.js
//! 001 Testimonials → sections/testimonials.html
//! 002 Call to Action → fallback (IO error: Is a directory (os error 21))
//!
//! Copied 3 assets
//! Site generated at dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::{BuildReport, SectionOutput};
use crate::sections::hero::MAX_IMAGES;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Positional index + name, with an optional count of `noun`.
///
/// ```text
/// 002 Collections (4 items)
/// 005 Newsletter
/// ```
fn entity_header(index: usize, name: &str, count: Option<(usize, &str)>) -> String {
    match count {
        Some((n, noun)) => format!("{} {} ({} {})", format_index(index), name, n, noun),
        None => format!("{} {}", format_index(index), name),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    let ctx = indent(1);

    let hero_images = config.hero.images.len().min(MAX_IMAGES);
    lines.push(entity_header(1, "Hero", Some((hero_images, "images"))));
    lines.push(format!("{ctx}Title: {}", truncate_desc(&config.hero.title, 60)));

    lines.push(entity_header(
        2,
        "Collections",
        Some((config.collections.items.len(), "items")),
    ));
    for (i, item) in config.collections.items.iter().enumerate() {
        lines.push(format!("{ctx}{} {} → {}", format_index(i + 1), item.title, item.href));
    }

    lines.push(entity_header(3, "Projects", Some((config.projects.items.len(), "items"))));
    for (i, item) in config.projects.items.iter().enumerate() {
        lines.push(format!("{ctx}{} {}", format_index(i + 1), item.title));
    }

    lines.push(entity_header(
        4,
        "Information Grid",
        Some((config.info.items.len(), "items")),
    ));
    for (i, item) in config.info.items.iter().enumerate() {
        lines.push(format!("{ctx}{} {} → {}", format_index(i + 1), item.title, item.href));
    }

    lines.push(entity_header(5, "Newsletter", None));
    lines.push(format!("{ctx}Title: {}", config.newsletter.title));

    lines.push(entity_header(
        6,
        "Testimonials",
        Some((config.testimonials.items.len(), "entries")),
    ));
    for (i, t) in config.testimonials.items.iter().enumerate() {
        lines.push(format!("{ctx}{} {}, {}", format_index(i + 1), t.name, t.company));
    }

    lines.push(entity_header(7, "Call to Action", None));
    lines.push(format!("{ctx}Variant: {}", config.cta.variant.class().trim_start_matches("cta-")));
    if config.cta.loading {
        lines.push(format!("{ctx}Loading: primary action disabled"));
    }
    if config.cta.disabled {
        lines.push(format!("{ctx}Disabled: both actions disabled"));
    }

    lines.push(entity_header(
        8,
        "About Us",
        Some((config.about.story.len(), "paragraphs")),
    ));
    lines.push(format!(
        "{ctx}{} stats, {} values",
        config.about.stats.len(),
        config.about.values.len()
    ));

    lines.push(entity_header(9, "FAQ", Some((config.faq.items.len(), "items"))));
    for entry in &config.faq.items {
        lines.push(format!(
            "{ctx}{} {}",
            format_index(entry.id as usize),
            truncate_desc(&entry.question, 60)
        ));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{ctx}config.toml"));
    } else {
        lines.push(format!("{ctx}(stock defaults)"));
    }
    if source_root.join("assets").is_dir() {
        lines.push(format!("{ctx}assets/"));
    }
    lines.push(format!(
        "{ctx}Optional sections: {}",
        if config.sections.defer { "deferred" } else { "inline" }
    ));

    lines
}

pub fn print_check_output(config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![
        "Home → index.html".to_string(),
        format!("Stylesheet → {}", report.stylesheet),
        format!("Script → {}", report.script),
    ];

    for (i, (section, output)) in report.sections.iter().enumerate() {
        let target = match output {
            SectionOutput::Inline => "inline".to_string(),
            SectionOutput::Fragment(path) => path.clone(),
            SectionOutput::Failed(reason) => format!("fallback ({})", reason),
        };
        lines.push(format!("{} {} → {}", format_index(i + 1), section.label(), target));
    }

    lines.push(String::new());
    if report.assets_copied > 0 {
        lines.push(format!("Copied {} assets", report.assets_copied));
    }
    lines.push(format!("Site generated at {}", report.output_dir.display()));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
