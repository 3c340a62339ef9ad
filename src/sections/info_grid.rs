use crate::config::InfoConfig;
use maud::{Markup, html};

pub fn render(info: &InfoConfig) -> Markup {
    html! {
        div.info-grid role="region" aria-label="Company information sections" {
            div.grid {
                @for item in &info.items {
                    article.info-card id=(item.id) data-card-id=(item.id) {
                        h3.info-title { (item.title) }
                        p.info-description { (item.description) }
                        a.info-link href=(item.href)
                            aria-label={ (item.link_text()) " about " (item.title.to_lowercase()) } {
                            (item.link_text())
                        }
                    }
                }
            }
        }
    }
}
