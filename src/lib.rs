//! # Eastern Edition
//!
//! Static site generator for the Eastern Edition furniture landing page. One
//! command renders a single scrollable page (header, hero, collections,
//! projects, information grid, newsletter signup, four optional sections and a
//! footer) plus the stylesheet and script that drive it in the browser.
//!
//! # Architecture
//!
//! ```text
//! config.toml ─┐
//!              ├─ config::load_config ─→ SiteConfig ─→ generate ─→ dist/
//! stock data ──┘                                        │
//!                                 sections/* + layout + page (Maud)
//! ```
//!
//! Interactive behavior (sticky header, menus, testimonial carousel, newsletter
//! form, FAQ accordion, deferred section loading) is modeled twice: once as
//! state machines in [`runtime`] running on a virtual-time host, and once as
//! the shipped `static/site.js`. The renderers take those states as input, so
//! the markup for every reachable state can be produced and tested from Rust.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation, color CSS |
//! | [`content`] | Stock page content: navigation, products, testimonials, FAQ, footer |
//! | [`types`] | Content records shared by config and renderers |
//! | [`runtime`] | Header, carousel, newsletter, accordion and deferred-load state machines |
//! | [`sections`] | One Maud renderer per page section |
//! | [`layout`] | Site header and footer |
//! | [`page`] | Whole-page assembly, deferred boundaries with placeholder and fallback |
//! | [`generate`] | Writes `index.html`, hashed assets and section fragments |
//! | [`icons`] | Inline SVG icons |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a build error and all interpolation is escaped.
//!
//! ## Deferred Sections as Fragments
//!
//! Testimonials, call to action, about and FAQ are not needed for the first
//! paint. With `sections.defer` on (the default) each one is written to
//! `sections/<slug>.html` and the page carries a "Loading..." placeholder that
//! the script swaps for the fetched fragment. A fragment that fails to write or
//! fetch is replaced by a fallback notice; the rest of the page is unaffected.
//!
//! ## Virtual Time
//!
//! Timers in [`runtime`] run on [`runtime::Host`], which only advances when a
//! test calls `advance`. Throttling and the carousel transition are therefore
//! deterministic in tests.

pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod layout;
pub mod output;
pub mod page;
pub mod runtime;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
