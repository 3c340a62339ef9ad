use crate::config::TestimonialsConfig;
use crate::icons;
use crate::runtime::CarouselState;
use maud::{Markup, html};

/// Render the carousel showing entry `state.current`.
///
/// Every entry is emitted so the browser script can rotate without another
/// fetch; only the current one is visible.
///
/// # Panics
///
/// If `testimonials.items` is empty. Validated configuration never is.
pub fn render(testimonials: &TestimonialsConfig, state: &CarouselState) -> Markup {
    let items = &testimonials.items;
    assert!(!items.is_empty(), "testimonial carousel needs at least one entry");
    let current = state.current % items.len();
    let card_class = if state.animating {
        "testimonial-card fade-out"
    } else {
        "testimonial-card fade-in"
    };

    html! {
        div.testimonials-section data-carousel data-count=(items.len()) {
            div.container {
                div.section-header {
                    h2.section-title { (testimonials.title) }
                    p.section-description { (testimonials.description) }
                }
                div.testimonial-container {
                    div class=(card_class) data-carousel-card {
                        @for (index, t) in items.iter().enumerate() {
                            div.testimonial data-index=(index) hidden[index != current] {
                                div.quote-section {
                                    div.quote-icon { (icons::quote_mark()) }
                                    blockquote.quote { (t.content) }
                                }
                                div.client-info {
                                    @if let Some(avatar) = &t.avatar {
                                        img.avatar src=(avatar) alt=[t.avatar_alt.as_deref()]
                                            loading="lazy" decoding="async";
                                    }
                                    div.client-details {
                                        h4.client-name { (t.name) }
                                        p.client-subtitle { (t.title) ", " (t.company) }
                                        @if let Some(project) = &t.project {
                                            p.project-info { "Project: " (project) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div.controls {
                        button.nav-button type="button" aria-label="Previous testimonial" data-action="prev" {
                            (icons::arrow_left())
                        }
                        div.indicators role="group" aria-label="Testimonial navigation indicators" {
                            @for index in 0..items.len() {
                                @let active = index == current;
                                button class=(if active { "indicator active" } else { "indicator" })
                                    type="button"
                                    aria-label={ "Go to testimonial " (index + 1) }
                                    aria-current=(if active { "true" } else { "false" })
                                    data-goto=(index) {}
                            }
                        }
                        button.nav-button type="button" aria-label="Next testimonial" data-action="next" {
                            (icons::arrow_right())
                        }
                    }
                }
                @if !testimonials.featured_projects.is_empty() {
                    div.featured-projects {
                        h3.projects-title { "Featured in projects" }
                        div.projects-grid {
                            @for project in &testimonials.featured_projects {
                                div.project-card {
                                    img.project-image src=(project.src) alt=(project.alt)
                                        loading="lazy" decoding="async";
                                    div.project-info {
                                        h4.project-card-title { (project.title) }
                                        p.project-card-subtitle { "Bespoke furniture solutions" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
