use crate::config::CollectionsConfig;
use maud::{Markup, html};

pub fn render(collections: &CollectionsConfig) -> Markup {
    html! {
        div.collections-section #shop {
            div.container {
                h2.section-title { (collections.title) }
                p.section-description { (collections.description) }
                div.collections-grid {
                    @for item in &collections.items {
                        a.collection-link href=(item.href) {
                            article.collection-card {
                                div.image-container {
                                    img src=(item.img) alt=(item.alt) loading="lazy" decoding="async";
                                }
                                div.card-content {
                                    h3.collection-title { (item.title) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
