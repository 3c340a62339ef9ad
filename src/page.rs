//! Root assembler.
//!
//! Lays the sections out in a fixed order:
//!
//! ```text
//! header
//! hero → collections → projects → info grid → newsletter
//! testimonials → call to action → about → FAQ     (deferred)
//! footer
//! ```
//!
//! Each section is wrapped in a `<section>` with an accessible name. The
//! optional sections are drawn from their [`DeferredBoundary`]: loaded markup
//! as is, a "Loading..." placeholder while not settled, and a fallback notice
//! when loading failed.

use crate::config::SiteConfig;
use crate::layout;
use crate::runtime::{DeferredBoundary, FormState, HeaderState, LoadState, OptionalSection};
use crate::sections;
use maud::{DOCTYPE, Markup, html};

pub const LOADING_TEXT: &str = "Loading...";

/// Asset URLs referenced by the document head and tail.
#[derive(Debug, Clone)]
pub struct PageAssets {
    pub stylesheet: String,
    pub script: String,
}

pub fn fallback_message(section: OptionalSection) -> String {
    format!("{} could not be loaded. Please refresh the page.", section.label())
}

/// Placeholder for a section whose content is fetched by the browser.
pub fn deferred_placeholder(section: OptionalSection, src: &str) -> Markup {
    placeholder(section, Some(src))
}

fn placeholder(section: OptionalSection, src: Option<&str>) -> Markup {
    html! {
        div.deferred-placeholder role="status" aria-live="polite"
            data-section=(section.slug())
            data-deferred-src=[src]
            data-fallback=(fallback_message(section)) {
            (LOADING_TEXT)
        }
    }
}

fn fallback(section: OptionalSection) -> Markup {
    html! {
        div.deferred-fallback role="alert" data-section=(section.slug()) {
            p { (fallback_message(section)) }
        }
    }
}

pub fn render_boundary(boundary: &DeferredBoundary) -> Markup {
    match boundary.state() {
        LoadState::NotLoaded | LoadState::Loading => placeholder(boundary.section(), None),
        LoadState::Loaded(markup) => markup.clone(),
        LoadState::Failed(_) => fallback(boundary.section()),
    }
}

/// Render the full page.
///
/// `boundaries` may list the optional sections in any order and may omit
/// some; missing ones render as not yet loaded.
pub fn render_page(
    config: &SiteConfig,
    boundaries: &[DeferredBoundary],
    assets: &PageAssets,
    year: i32,
) -> Markup {
    let content = html! {
        (layout::render_header(&config.site, &HeaderState::default()))
        main.main-content {
            section aria-label="Hero Section" { (sections::hero::render(&config.hero)) }
            section aria-label="Collections" { (sections::collections::render(&config.collections)) }
            section aria-label="Projects" { (sections::projects::render(&config.projects)) }
            section aria-label="Information Grid" { (sections::info_grid::render(&config.info)) }
            section aria-label="Newsletter Signup" {
                (sections::newsletter::render(&config.newsletter, &FormState::default()))
            }
            @for optional in OptionalSection::ALL {
                section aria-label=(optional.label()) id=(optional.slug()) {
                    @match boundaries.iter().find(|b| b.section() == optional) {
                        Some(boundary) => { (render_boundary(boundary)) }
                        None => { (placeholder(optional, None)) }
                    }
                }
            }
        }
        (layout::render_footer(&config.site, &config.footer, year))
    };

    base_document(&config.site.company.name, assets, content)
}

fn base_document(title: &str, assets: &PageAssets, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(assets.stylesheet);
                script src=(assets.script) defer {}
            }
            body {
                div.page { (content) }
            }
        }
    }
}
