use crate::config::{CtaConfig, CtaVariant};
use crate::icons;
use maud::{Markup, html};

/// Call-to-action band.
///
/// Both actions are links. `loading` disables the primary action and swaps its
/// chevron for a spinner; `disabled` disables both actions. The secondary
/// action ignores `loading`. A disabled action keeps its label but loses its
/// `href` and carries `aria-disabled="true"`.
pub fn render(cta: &CtaConfig) -> Markup {
    let section_class = format!("cta-section {}", cta.variant.class());
    let style = (cta.variant == CtaVariant::Image)
        .then(|| format!("background-image: url({})", cta.background_image));
    let primary_label = if cta.loading {
        format!("{} - Loading", cta.primary_button_text)
    } else {
        cta.primary_button_text.clone()
    };
    let primary_off = cta.disabled || cta.loading;
    let secondary_off = cta.disabled;

    html! {
        div class=(section_class) style=[style] role="region" aria-labelledby="cta-heading" {
            @if cta.variant == CtaVariant::Image {
                div.image-overlay {}
            }
            div.container {
                div.content-wrapper {
                    h2 #cta-heading .cta-heading { (cta.title) }
                    p.cta-description { (cta.description) }
                    div.button-group role="group" aria-label="Call to action buttons" {
                        a class=(button_class(true, cta))
                            href=[(!primary_off).then_some(&cta.primary_href)]
                            aria-label=(primary_label)
                            aria-disabled=[primary_off.then_some("true")] {
                            @if cta.loading {
                                (icons::spinner())
                            }
                            span class=[cta.loading.then_some("button-text-loading")] {
                                (cta.primary_button_text)
                            }
                            @if !cta.loading {
                                (icons::chevron_right())
                            }
                        }
                        a class=(button_class(false, cta))
                            href=[(!secondary_off).then_some(&cta.secondary_href)]
                            aria-label=(cta.secondary_button_text)
                            aria-disabled=[secondary_off.then_some("true")] {
                            (cta.secondary_button_text)
                        }
                    }
                    div.trust-indicators role="list" aria-label="Service highlights" {
                        @for indicator in &cta.trust_indicators {
                            div.trust-item role="listitem" {
                                (icons::check())
                                span { (indicator.text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn button_class(primary: bool, cta: &CtaConfig) -> String {
    let mut class = String::from(if primary {
        "cta-button primary-button"
    } else {
        "cta-button secondary-button"
    });
    if cta.disabled {
        class.push_str(" disabled");
    }
    if primary && cta.loading {
        class.push_str(" loading");
    }
    class
}
