//! Inline SVG primitives.
//!
//! Every icon is decorative (`aria-hidden`) and inherits its color from the
//! surrounding text via `currentColor`. Child elements are closed explicitly
//! (`{}`) because the HTML parser does not honor self-closing tags inside
//! inline SVG.

use maud::{Markup, html};

/// Downward caret used by the language switch and the FAQ entries.
/// `open` rotates it.
pub fn chevron_down(class: &str, open: bool) -> Markup {
    let class = if open {
        format!("{class} open")
    } else {
        class.to_string()
    };
    html! {
        svg class=(class) viewBox="0 0 20 20" fill="currentColor" aria-hidden="true" {
            path d="M5 7l5 5 5-5H5z" {}
        }
    }
}

pub fn chevron_right() -> Markup {
    html! {
        svg.button-icon fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" {}
        }
    }
}

pub fn check() -> Markup {
    html! {
        svg.check-icon fill="currentColor" viewBox="0 0 20 20" aria-hidden="true" {
            path fill-rule="evenodd" clip-rule="evenodd"
                d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" {}
        }
    }
}

pub fn spinner() -> Markup {
    html! {
        svg.loading-spinner viewBox="0 0 24 24" aria-hidden="true" {
            circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" fill="none" opacity="0.25" {}
            path fill="currentColor"
                d="M4 12a8 8 0 0 1 8-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 0 1 4 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" {}
        }
    }
}

/// Hamburger when closed, a cross when `open`.
pub fn menu_toggle(open: bool) -> Markup {
    let d = if open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    };
    html! {
        svg.hamburger viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true" {
            path stroke-width="2" stroke-linecap="round" stroke-linejoin="round" d=(d) {}
        }
    }
}

pub fn arrow_left() -> Markup {
    arrow("M15 18l-6-6 6-6")
}

pub fn arrow_right() -> Markup {
    arrow("M9 18l6-6-6-6")
}

fn arrow(d: &str) -> Markup {
    html! {
        svg.nav-icon viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true" {
            path stroke-width="2" stroke-linecap="round" stroke-linejoin="round" d=(d) {}
        }
    }
}

pub fn quote_mark() -> Markup {
    html! {
        svg width="32" height="24" viewBox="0 0 32 24" fill="none" aria-hidden="true" {
            path fill="currentColor"
                d="M0 12.4C0 5.6 3.2 0 9.6 0v4.8C6.4 4.8 4.8 7.2 4.8 9.6h4.8V24H0V12.4zm14.4 0C14.4 5.6 17.6 0 24 0v4.8c-3.2 0-4.8 2.4-4.8 4.8H24V24H14.4V12.4z" {}
        }
    }
}
