//! Static site generation.
//!
//! Renders the page from a resolved [`SiteConfig`] and writes a deployable
//! directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── style.1a2b3c4d.css        # color variables + base styles
//! ├── site.5e6f7a8b.js          # header, carousel, accordion, form, loader
//! ├── sections/                 # only with sections.defer = true
//! │   ├── testimonials.html
//! │   ├── cta.html
//! │   ├── about.html
//! │   └── faq.html
//! └── assets/                   # copied from <source>/assets/, if present
//! ```
//!
//! ## Deferred Sections
//!
//! With `sections.defer` set, each optional section is written to its own
//! fragment and the index carries a placeholder that the script swaps for the
//! fetched markup. A fragment that cannot be written leaves its section
//! `Failed`: the index gets the fallback notice in its place and the build
//! carries on. Without `defer`, the sections are rendered inline.
//!
//! ## CSS and JavaScript
//!
//! Both are embedded at compile time from `static/`. Written filenames carry
//! the first 8 hex digits of the content's SHA-256 so a deploy never serves a
//! stale cached copy.
//!
//! ## Rebuilds
//!
//! Building into an existing directory removes what the previous build left
//! behind: hashed stylesheets and scripts other than the ones just written,
//! and the `sections/` directory when sections are now rendered inline.

use crate::config::{self, SiteConfig};
use crate::page::{self, PageAssets};
use crate::runtime::deferred::{self, LoadError, SectionLoader};
use crate::runtime::{LoadState, OptionalSection};
use crate::sections;
use chrono::{Datelike, Utc};
use maud::Markup;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset copy failed: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

pub const SECTIONS_DIR: &str = "sections";
pub const ASSETS_DIR: &str = "assets";

/// Names `write_hashed` produces for the stylesheet and script.
static HASHED_ASSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(style\.[0-9a-f]{8}\.css|site\.[0-9a-f]{8}\.js)$")
        .expect("hashed asset pattern compiles")
});

/// How an optional section ended up in the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutput {
    Inline,
    /// Written to this path, relative to the output directory.
    Fragment(String),
    /// Rendered as the fallback notice.
    Failed(String),
}

/// What a build wrote.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub stylesheet: String,
    pub script: String,
    pub sections: Vec<(OptionalSection, SectionOutput)>,
    pub assets_copied: usize,
}

/// Generate the site with the footer year taken from the system clock.
pub fn generate(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    generate_with_year(config, source_dir, output_dir, current_year())
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn generate_with_year(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let stylesheet = write_hashed(output_dir, "style", "css", &css)?;
    let script = write_hashed(output_dir, "site", "js", JS)?;
    prune_hashed_assets(output_dir, &[stylesheet.as_str(), script.as_str()])?;

    let boundaries = if config.sections.defer {
        let dir = output_dir.join(SECTIONS_DIR);
        fs::create_dir_all(&dir)?;
        deferred::load_all(&mut FragmentWriter { config, dir })
    } else {
        let dir = output_dir.join(SECTIONS_DIR);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
            debug!(path = %dir.display(), "removed stale fragments");
        }
        deferred::load_all(&mut InlineRenderer { config })
    };

    let sections = boundaries
        .iter()
        .map(|b| {
            let output = match b.state() {
                LoadState::Failed(reason) => SectionOutput::Failed(reason.clone()),
                _ if config.sections.defer => SectionOutput::Fragment(fragment_src(b.section())),
                _ => SectionOutput::Inline,
            };
            (b.section(), output)
        })
        .collect();

    let assets = PageAssets {
        stylesheet: stylesheet.clone(),
        script: script.clone(),
    };
    let index = page::render_page(config, &boundaries, &assets, year);
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, index.into_string())?;
    debug!(path = %index_path.display(), "wrote index");

    let assets_copied = copy_assets(&source_dir.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR))?;

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        stylesheet,
        script,
        sections,
        assets_copied,
    })
}

/// `{stem}.{first 8 hex of sha256}.{ext}`
pub fn hashed_name(stem: &str, ext: &str, content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let hex = format!("{:x}", digest);
    format!("{stem}.{}.{ext}", &hex[..8])
}

fn write_hashed(
    output_dir: &Path,
    stem: &str,
    ext: &str,
    content: &str,
) -> Result<String, GenerateError> {
    let name = hashed_name(stem, ext, content);
    let path = output_dir.join(&name);
    fs::write(&path, content)?;
    debug!(path = %path.display(), "wrote asset");
    Ok(name)
}

/// Delete hashed stylesheets and scripts in `output_dir` not named in `keep`.
fn prune_hashed_assets(output_dir: &Path, keep: &[&str]) -> Result<(), GenerateError> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if HASHED_ASSET.is_match(name) && !keep.contains(&name) && entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            debug!(file = name, "removed stale asset");
        }
    }
    Ok(())
}

fn fragment_src(section: OptionalSection) -> String {
    format!("{SECTIONS_DIR}/{}.html", section.slug())
}

/// Renders optional sections straight into the index.
struct InlineRenderer<'a> {
    config: &'a SiteConfig,
}

impl SectionLoader for InlineRenderer<'_> {
    fn load(&mut self, section: OptionalSection) -> Result<Markup, LoadError> {
        Ok(sections::render_optional(section, self.config))
    }
}

/// Writes each optional section to its fragment file and hands back the
/// placeholder that fetches it.
struct FragmentWriter<'a> {
    config: &'a SiteConfig,
    dir: PathBuf,
}

impl SectionLoader for FragmentWriter<'_> {
    fn load(&mut self, section: OptionalSection) -> Result<Markup, LoadError> {
        let markup = sections::render_optional(section, self.config);
        let path = self.dir.join(format!("{}.html", section.slug()));
        fs::write(&path, markup.into_string())?;
        debug!(path = %path.display(), "wrote fragment");
        Ok(page::deferred_placeholder(section, &fragment_src(section)))
    }
}

/// Copy `src` recursively into `dst`. A missing `src` copies nothing.
/// Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    debug!(count = copied, dst = %dst.display(), "copied assets");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::test_helpers::{section_body, source_with_config};
    use tempfile::TempDir;

    fn build(config: &SiteConfig, source: &Path) -> (TempDir, BuildReport) {
        let out = TempDir::new().unwrap();
        let report = generate_with_year(config, source, out.path(), 2025).unwrap();
        (out, report)
    }

    fn index(out: &TempDir) -> String {
        fs::read_to_string(out.path().join("index.html")).unwrap()
    }

    #[test]
    fn hashed_name_uses_content_digest() {
        let a = hashed_name("style", "css", "body{}");
        let b = hashed_name("style", "css", "body{ }");
        assert!(a.starts_with("style.") && a.ends_with(".css"));
        assert_eq!(a.len(), "style.".len() + 8 + ".css".len());
        assert_ne!(a, b);
        assert_eq!(a, hashed_name("style", "css", "body{}"));
    }

    #[test]
    fn deferred_build_writes_fragments_and_placeholders() {
        let source = TempDir::new().unwrap();
        let (out, report) = build(&SiteConfig::default(), source.path());

        for section in OptionalSection::ALL {
            let fragment = out
                .path()
                .join(SECTIONS_DIR)
                .join(format!("{}.html", section.slug()));
            assert!(fragment.exists(), "missing fragment {}", fragment.display());
        }
        let html = index(&out);
        let faq = section_body(&html, "FAQ");
        assert!(faq.contains(r#"data-deferred-src="sections/faq.html""#));
        assert!(faq.contains("Loading..."));
        assert!(report
            .sections
            .iter()
            .all(|(_, output)| matches!(output, SectionOutput::Fragment(_))));

        let faq_fragment =
            fs::read_to_string(out.path().join("sections/faq.html")).unwrap();
        assert!(faq_fragment.contains("Frequently Asked Questions"));
    }

    #[test]
    fn inline_build_renders_sections_into_index() {
        let source = source_with_config("[sections]\ndefer = false\n");
        let config = load_config(source.path()).unwrap();

        let (out, report) = build(&config, source.path());

        assert!(!out.path().join(SECTIONS_DIR).exists());
        let html = index(&out);
        assert!(section_body(&html, "FAQ").contains("Frequently Asked Questions"));
        assert!(!html.contains("data-deferred-src"));
        assert!(report
            .sections
            .iter()
            .all(|(_, output)| *output == SectionOutput::Inline));
    }

    #[test]
    fn unwritable_fragment_falls_back_inline() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        // A directory where the fragment file should go makes the write fail.
        fs::create_dir_all(out.path().join("sections/cta.html")).unwrap();

        let report =
            generate_with_year(&SiteConfig::default(), source.path(), out.path(), 2025).unwrap();

        let html = index(&out);
        let cta = section_body(&html, "Call to Action");
        assert!(cta.contains(r#"role="alert""#));
        assert!(!cta.contains("data-deferred-src"));
        assert!(section_body(&html, "About Us").contains("data-deferred-src"));

        let (_, cta_output) = report
            .sections
            .iter()
            .find(|(s, _)| *s == OptionalSection::CallToAction)
            .unwrap();
        assert!(matches!(cta_output, SectionOutput::Failed(_)));
    }

    #[test]
    fn index_links_hashed_assets() {
        let source = TempDir::new().unwrap();
        let (out, report) = build(&SiteConfig::default(), source.path());

        assert!(out.path().join(&report.stylesheet).exists());
        assert!(out.path().join(&report.script).exists());
        let html = index(&out);
        assert!(html.contains(&format!(r#"href="{}""#, report.stylesheet)));
        assert!(html.contains(&format!(r#"src="{}""#, report.script)));

        let css = fs::read_to_string(out.path().join(&report.stylesheet)).unwrap();
        assert!(css.starts_with(":root"));
    }

    #[test]
    fn configured_colors_change_stylesheet_hash() {
        let source = source_with_config("[colors]\naccent = \"#8b5a2b\"\n");
        let config = load_config(source.path()).unwrap();
        let (_, custom) = build(&config, source.path());
        let (_, stock) = build(&SiteConfig::default(), source.path());

        assert_ne!(custom.stylesheet, stock.stylesheet);
        assert_eq!(custom.script, stock.script);
    }

    #[test]
    fn copies_assets_tree() {
        let source = TempDir::new().unwrap();
        let assets = source.path().join("assets/img");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("logo.svg"), "<svg/>").unwrap();
        fs::write(source.path().join("assets/favicon.ico"), [0u8; 4]).unwrap();

        let (out, report) = build(&SiteConfig::default(), source.path());

        assert_eq!(report.assets_copied, 2);
        assert!(out.path().join("assets/img/logo.svg").exists());
        assert!(out.path().join("assets/favicon.ico").exists());
    }

    #[test]
    fn missing_assets_dir_is_fine() {
        let source = TempDir::new().unwrap();
        let (out, report) = build(&SiteConfig::default(), source.path());
        assert_eq!(report.assets_copied, 0);
        assert!(!out.path().join(ASSETS_DIR).exists());
    }

    #[test]
    fn inline_rebuild_removes_old_fragments() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        generate_with_year(&SiteConfig::default(), source.path(), out.path(), 2025).unwrap();
        assert!(out.path().join("sections/faq.html").exists());

        let mut inline = SiteConfig::default();
        inline.sections.defer = false;
        generate_with_year(&inline, source.path(), out.path(), 2025).unwrap();

        assert!(!out.path().join(SECTIONS_DIR).exists());
    }

    #[test]
    fn rebuild_prunes_stale_hashed_assets() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("style.deadbeef.css"), "old").unwrap();
        fs::write(out.path().join("site.0badf00d.js"), "old").unwrap();
        fs::write(out.path().join("robots.txt"), "keep").unwrap();

        let report =
            generate_with_year(&SiteConfig::default(), source.path(), out.path(), 2025).unwrap();

        assert!(!out.path().join("style.deadbeef.css").exists());
        assert!(!out.path().join("site.0badf00d.js").exists());
        assert!(out.path().join("robots.txt").exists());
        assert!(out.path().join(&report.stylesheet).exists());
        assert!(out.path().join(&report.script).exists());
    }

    #[test]
    fn footer_uses_given_year() {
        let source = TempDir::new().unwrap();
        let (out, _) = build(&SiteConfig::default(), source.path());
        assert!(index(&out).contains("© 2025 Eastern Edition. All rights reserved."));
    }
}
