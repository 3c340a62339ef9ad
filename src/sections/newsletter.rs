use crate::config::NewsletterConfig;
use crate::runtime::FormState;
use maud::{Markup, html};

pub const SUBMITTING_TEXT: &str = "Subscribing...";
pub const STATUS_TEXT: &str = "Processing your subscription...";

pub fn render(newsletter: &NewsletterConfig, form: &FormState) -> Markup {
    let input_class = if form.error.is_some() {
        "newsletter-input input-error"
    } else {
        "newsletter-input"
    };
    let button_text = if form.is_submitting {
        SUBMITTING_TEXT
    } else {
        newsletter.button_text.as_str()
    };

    html! {
        div.newsletter {
            div.container {
                div.newsletter-content {
                    div.text-content {
                        h4.newsletter-title { (newsletter.title) }
                        p.newsletter-description { (newsletter.description) }
                    }
                    form.newsletter-form novalidate data-newsletter
                        data-submitting-text=(SUBMITTING_TEXT) data-button-text=(newsletter.button_text) {
                        div.input-group {
                            label.visually-hidden for="newsletter-email" { "Email address" }
                            input #newsletter-email class=(input_class) type="email" name="email"
                                value=(form.email) placeholder=(newsletter.placeholder)
                                required autocomplete="email"
                                disabled[form.is_submitting]
                                aria-describedby=[form.error.as_ref().map(|_| "newsletter-error")];
                            button.newsletter-button type="submit"
                                disabled[!form.can_submit()]
                                aria-describedby=[form.is_submitting.then_some("newsletter-status")] {
                                (button_text)
                            }
                        }
                        div #newsletter-error .newsletter-error role="alert" aria-live="polite"
                            hidden[form.error.is_none()] {
                            @if let Some(error) = &form.error {
                                (error)
                            }
                        }
                        div #newsletter-status .newsletter-status aria-live="polite"
                            hidden[!form.is_submitting] {
                            (STATUS_TEXT)
                        }
                    }
                }
            }
        }
    }
}
