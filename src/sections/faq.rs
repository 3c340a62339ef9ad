use crate::config::FaqConfig;
use crate::icons;
use crate::runtime::Accordion;
use maud::{Markup, html};

pub fn render(faq: &FaqConfig, accordion: &Accordion) -> Markup {
    html! {
        div.faq-section aria-labelledby="faq-title" data-accordion {
            div.container {
                header.faq-header {
                    h2 #faq-title .faq-title { (faq.title) }
                    p.faq-subtitle { (faq.subtitle) }
                }
                div.faq-list {
                    @for entry in &faq.items {
                        @let open = accordion.is_open(entry.id);
                        @let answer_id = format!("faq-answer-{}", entry.id);
                        div.faq-item {
                            button class=(if open { "faq-question active" } else { "faq-question" })
                                type="button"
                                aria-expanded=(if open { "true" } else { "false" })
                                aria-controls=(answer_id)
                                data-faq=(entry.id) {
                                span.question-text { (entry.question) }
                                (icons::chevron_down("faq-icon", open))
                            }
                            div class=(if open { "faq-answer answer-open" } else { "faq-answer" })
                                id=(answer_id) role="region"
                                aria-hidden=(if open { "false" } else { "true" }) {
                                div.answer-content {
                                    p.answer-text { (entry.answer) }
                                }
                            }
                        }
                    }
                }
                div.contact-prompt {
                    p.contact-text {
                        "Still have questions? "
                        a.contact-link href="#contact" { "Get in touch with our team" }
                    }
                }
            }
        }
    }
}
