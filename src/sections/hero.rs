use crate::config::HeroConfig;
use maud::{Markup, html};

/// The mosaic holds at most this many images; extras are ignored.
pub const MAX_IMAGES: usize = 4;

pub fn render(hero: &HeroConfig) -> Markup {
    html! {
        div.hero {
            div.container {
                div.hero-content {
                    div.text-content {
                        h1.hero-title { (hero.title) }
                        p.hero-subtitle { (hero.subtitle) }
                        div.button-group role="group" aria-label="Hero actions" {
                            a.button.button-primary href=(hero.primary_href) { (hero.primary_button_text) }
                            a.button.button-secondary href=(hero.secondary_href) { (hero.secondary_button_text) }
                        }
                    }
                    div.image-grid {
                        @for image in hero.images.iter().take(MAX_IMAGES) {
                            div.image-wrapper {
                                img.hero-image src=(image.src) alt=(image.alt)
                                    loading=(image.loading.as_str()) decoding="async"
                                    sizes="(max-width: 768px) 50vw, (max-width: 1024px) 25vw, 300px";
                            }
                        }
                    }
                }
                div.decorative-overlay aria-hidden="true" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeroImage, ImageLoading};

    #[test]
    fn renders_at_most_four_images() {
        let mut hero = HeroConfig::default();
        hero.images = (0..6)
            .map(|i| HeroImage {
                src: format!("https://img.test/{i}.jpg"),
                alt: format!("Image {i}"),
                loading: ImageLoading::Lazy,
            })
            .collect();

        let html = render(&hero).into_string();

        assert_eq!(html.matches("<img").count(), MAX_IMAGES);
        assert!(html.contains("/3.jpg"));
        assert!(!html.contains("/4.jpg"));
    }

    #[test]
    fn first_stock_image_loads_eagerly() {
        let html = render(&HeroConfig::default()).into_string();
        assert_eq!(html.matches(r#"loading="eager""#).count(), 1);
        assert_eq!(html.matches(r#"loading="lazy""#).count(), 3);
    }

    #[test]
    fn buttons_use_configured_targets() {
        let mut hero = HeroConfig::default();
        hero.primary_button_text = "Shop now".into();
        hero.primary_href = "#sale".into();

        let html = render(&hero).into_string();
        assert!(html.contains(r##"href="#sale""##));
        assert!(html.contains(">Shop now</a>"));
        assert!(html.contains(r##"href="#projects""##));
    }
}
