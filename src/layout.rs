//! Page chrome: the sticky header and the footer.
//!
//! The header is a pure function of [`HeaderState`]. Menus are always present
//! in the markup and hidden while closed, so the browser script only has to
//! flip attributes and classes to reproduce the same states.

use crate::config::{FooterConfig, SiteInfo};
use crate::icons;
use crate::runtime::HeaderState;
use crate::types::NavItem;
use maud::{Markup, html};

pub fn render_header(site: &SiteInfo, state: &HeaderState) -> Markup {
    let header_class = if state.is_scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    };
    let expanded = |open: bool| if open { "true" } else { "false" };

    html! {
        header class=(header_class) role="banner" data-header {
            div.top-bar {
                div.container {
                    div.left-section {
                        div.language-dropdown data-region="language" {
                            button.language-button type="button"
                                aria-haspopup="true"
                                aria-expanded=(expanded(state.is_lang_open))
                                aria-label="Select language"
                                data-action="toggle-lang" {
                                span.language-text { "EN" }
                                (icons::chevron_down("chevron", state.is_lang_open))
                            }
                            div.language-menu role="menu" hidden[!state.is_lang_open] {
                                button.language-option.active type="button" role="menuitem" aria-current="true" {
                                    "English"
                                }
                                a.language-option href=(site.korean_site_url) role="menuitem" { "Korean site" }
                            }
                        }
                        nav.quick-nav aria-label="Quick navigation" {
                            @for link in &site.quick_links {
                                a.quick-nav-link href=(link.href) { (link.label) }
                            }
                        }
                    }
                    div.right-section {
                        a.login-link href=(site.login_url) { "Login" }
                        button.subscribe-button type="button" { "Subscribe" }
                    }
                }
            }
            div.main-header {
                div.container {
                    div.left-section {
                        a.logo href="/" aria-label="Eastern Edition Home" {
                            "EASTERN" span.logo-light { "EDITION" }
                        }
                        nav.desktop-nav aria-label="Main navigation" {
                            @for item in &site.nav {
                                a.nav-link href=(item.href) { (item.label) }
                            }
                        }
                    }
                    div.right-section {
                        button.cart-button type="button" { "Cart" }
                        button.mobile-menu-button type="button"
                            aria-label="Toggle mobile menu"
                            aria-expanded=(expanded(state.is_mobile_menu_open))
                            aria-controls="mobile-menu"
                            data-action="toggle-mobile" {
                            (icons::menu_toggle(state.is_mobile_menu_open))
                        }
                    }
                }
            }
            div.overlay hidden[!state.is_mobile_menu_open] data-action="close-mobile" {}
            nav.mobile-nav #mobile-menu aria-label="Mobile navigation"
                hidden[!state.is_mobile_menu_open] data-region="mobile" {
                div.mobile-nav-content {
                    @for item in &site.nav {
                        (mobile_link(item))
                    }
                    div.mobile-nav-footer {
                        @if let Some(contact) = site.quick_links.iter().find(|l| l.label == "Contact") {
                            (mobile_link(contact))
                        }
                        button.mobile-cart-button type="button" data-action="close-mobile" { "Cart" }
                    }
                }
            }
        }
    }
}

fn mobile_link(item: &NavItem) -> Markup {
    html! {
        a.mobile-nav-link href=(item.href) data-action="close-mobile" { (item.label) }
    }
}

/// Footer with the company block, the link columns and the copyright line.
/// `year` is supplied by the caller so rendering stays deterministic.
pub fn render_footer(site: &SiteInfo, footer: &FooterConfig, year: i32) -> Markup {
    let company = &site.company;
    html! {
        footer.site-footer role="contentinfo" {
            div.container {
                div.footer-grid {
                    div.brand-section {
                        h2.brand-title { (company.name) }
                        address.address {
                            p { (company.address) }
                            p.email {
                                span.sr-only { "Email: " }
                                "E: " (company.email)
                            }
                        }
                    }
                    @for section in &footer.sections {
                        @let heading_id = heading_id(&section.title);
                        nav.navigation-section aria-labelledby=(heading_id) {
                            h3.section-title id=(heading_id) { (section.title) }
                            ul.link-list {
                                @for link in &section.links {
                                    li {
                                        a.footer-link href=(link.href) aria-label={ "Maps to " (link.label) } {
                                            (link.label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div.copyright {
                    p { "© " (year) " " (company.name) ". All rights reserved." }
                }
            }
        }
    }
}

/// `"About Us"` → `"about-us-heading"`.
fn heading_id(title: &str) -> String {
    let slug: Vec<String> = title.split_whitespace().map(str::to_lowercase).collect();
    format!("{}-heading", slug.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FooterSection;

    fn header(state: HeaderState) -> String {
        render_header(&SiteInfo::default(), &state).into_string()
    }

    #[test]
    fn closed_header_hides_menus() {
        let html = header(HeaderState::default());
        assert!(html.contains(r#"class="site-header""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"role="menu" hidden"#));
        assert!(html.contains("hidden data-region=\"mobile\""));
    }

    #[test]
    fn open_flags_show_menus_and_mark_scrolled() {
        let html = header(HeaderState {
            is_lang_open: true,
            is_mobile_menu_open: true,
            is_scrolled: true,
        });
        assert!(html.contains(r#"class="site-header scrolled""#));
        assert!(!html.contains(r#"role="menu" hidden"#));
        assert!(!html.contains("hidden data-region=\"mobile\""));
        assert!(html.contains(r#"class="chevron open""#));
        assert!(html.contains("M6 18L18 6"));
    }

    #[test]
    fn header_links_come_from_site_info() {
        let html = header(HeaderState::default());
        for label in ["Products", "Project", "About", "Bespoke", "Store", "Contact"] {
            assert!(html.contains(&format!(">{}</a>", label)), "missing {label}");
        }
        assert!(html.contains("EASTERN"));
        assert!(html.contains(r#"href="https://eastern-edition.co.kr""#));
        assert!(html.contains(">Login</a>"));
    }

    #[test]
    fn mobile_footer_carries_contact_and_cart() {
        let html = header(HeaderState::default());
        let footer = html.split("mobile-nav-footer").nth(1).unwrap();
        assert!(footer.contains(">Contact</a>"));
        assert!(footer.contains(">Cart</button>"));
    }

    #[test]
    fn footer_renders_year_and_columns() {
        let html =
            render_footer(&SiteInfo::default(), &FooterConfig::default(), 2031).into_string();
        assert!(html.contains("© 2031 Eastern Edition. All rights reserved."));
        assert!(html.contains(r#"id="products-heading""#));
        assert!(html.contains(r#"id="company-heading""#));
        assert!(html.contains(r#"aria-label="Maps to Sofa""#));
        assert!(html.contains("contact@eastern-edition.com"));
    }

    #[test]
    fn multi_word_footer_titles_get_dashed_ids() {
        let footer = FooterConfig {
            sections: vec![FooterSection {
                title: "About  Us".to_string(),
                links: vec![],
            }],
        };
        let html = render_footer(&SiteInfo::default(), &footer, 2031).into_string();
        assert!(html.contains(r#"aria-labelledby="about-us-heading""#));
        assert!(html.contains(r#"id="about-us-heading""#));
        assert!(!html.contains("about us"));
    }
}
