//! One renderer per page section.
//!
//! Every renderer is a pure function of its slice of [`SiteConfig`] plus, for
//! interactive sections, the state snapshot it draws. The page assembler
//! wraps each result in a labelled `<section>`.

pub mod about;
pub mod collections;
pub mod cta;
pub mod faq;
pub mod hero;
pub mod info_grid;
pub mod newsletter;
pub mod projects;
pub mod testimonials;

use crate::config::SiteConfig;
use crate::runtime::{Accordion, CarouselState, OptionalSection};
use maud::Markup;

/// Render an optional section in its initial state: first testimonial shown,
/// every FAQ entry collapsed.
pub fn render_optional(section: OptionalSection, config: &SiteConfig) -> Markup {
    match section {
        OptionalSection::Testimonials => {
            testimonials::render(&config.testimonials, &CarouselState::default())
        }
        OptionalSection::CallToAction => cta::render(&config.cta),
        OptionalSection::About => about::render(&config.about),
        OptionalSection::Faq => faq::render(&config.faq, &Accordion::default()),
    }
}
