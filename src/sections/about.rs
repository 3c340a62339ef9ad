use crate::config::AboutConfig;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

pub fn render(about: &AboutConfig) -> Markup {
    html! {
        div.about-section aria-labelledby="about-heading" {
            div.container {
                div.content-grid {
                    article.main-content {
                        p.section-label { (about.label) }
                        h2 #about-heading .main-heading { (about.heading) }
                        div.story-content {
                            @for (i, paragraph) in about.story.iter().enumerate() {
                                div class=(if i == 0 { "lead-paragraph" } else { "body-paragraph" }) {
                                    (markdown(paragraph))
                                }
                            }
                        }
                    }
                    aside.visual-content aria-label="Studio imagery" {
                        figure.image-container {
                            img.about-image src=(about.image) alt=(about.image_alt)
                                loading="lazy" decoding="async";
                            figcaption.image-overlay {
                                span.overlay-text { (about.image_caption) }
                            }
                        }
                    }
                }
                section.stats-section aria-labelledby="stats-heading" {
                    h3 #stats-heading .visually-hidden { "Company Statistics" }
                    div.stats-grid {
                        @for stat in &about.stats {
                            div.stat-item {
                                div.stat-number aria-label=(stat.aria_label) { (stat.number) }
                                div.stat-label { (stat.label) }
                            }
                        }
                    }
                }
                section.values-section aria-labelledby="values-heading" {
                    h3 #values-heading .values-heading { (about.values_heading) }
                    div.values-grid {
                        @for value in &about.values {
                            article.value-item {
                                h4.value-title { (value.title) }
                                p.value-description { (value.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}
