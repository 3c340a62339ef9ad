//! Content entities shared by the config layer, the section renderers and the
//! interactive runtime.
//!
//! Entities have no identity beyond their position in a list. Each list type
//! has one key field (title, id or label) that must be unique within its list;
//! [`crate::config::SiteConfig::validate`] enforces that for configured
//! content.

use serde::{Deserialize, Serialize};

/// A navigation link: header menus, footer columns, quick links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// Product category tile in the collections grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    pub title: String,
    /// Image URL on the external content host.
    pub img: String,
    pub alt: String,
    pub href: String,
}

/// Showcase tile in the projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Informational tile (philosophy, archive, bespoke).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoGridItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl InfoGridItem {
    pub fn link_text(&self) -> &str {
        self.link_text.as_deref().unwrap_or("Learn more")
    }
}

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_alt: Option<String>,
}

/// One accordion entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// How the browser should schedule an image fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLoading {
    Eager,
    #[default]
    Lazy,
}

impl ImageLoading {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageLoading::Eager => "eager",
            ImageLoading::Lazy => "lazy",
        }
    }
}

/// Image tile in the hero mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub loading: ImageLoading,
}

/// Featured project card under the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    pub title: String,
}

/// A headline number in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub number: String,
    pub label: String,
    /// Screen-reader description of `number`.
    pub aria_label: String,
}

/// A company value card in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Value {
    pub title: String,
    pub description: String,
}

/// A checkmarked highlight under the call-to-action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustIndicator {
    pub id: String,
    pub text: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<NavItem>,
}

/// Brand and contact block shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub email: String,
}
