//! Site configuration module.
//!
//! Every section of the page renders stock content unless `config.toml` in
//! the source directory overrides it. The file is sparse: set only what you
//! want to change.
//!
//! ```toml
//! [hero]
//! title = "Furniture for slow living."
//!
//! [cta]
//! variant = "dark"
//!
//! [[collections.items]]
//! title = "Lamp"
//! img = "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=800"
//! alt = "A paper lamp on an oak side table."
//! href = "#lamp"
//! ```
//!
//! ## Merging
//!
//! Stock defaults are serialized to a TOML table and the user file is merged
//! on top of it key by key ([`merge_toml`]). Tables merge recursively; arrays
//! and scalars replace. Configuring `[[collections.items]]` therefore replaces
//! the whole collection list rather than appending to it.
//!
//! Unknown keys are rejected to catch typos early.

use crate::content;
use crate::types::{
    Collection, CompanyInfo, Faq, FooterSection, HeroImage, InfoGridItem, NavItem, Project,
    ProjectImage, Stat, Testimonial, TrustIndicator, Value,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand, contact details and navigation.
    pub site: SiteInfo,
    /// Palette exposed as CSS custom properties.
    pub colors: ColorScheme,
    pub hero: HeroConfig,
    pub collections: CollectionsConfig,
    pub projects: ProjectsConfig,
    pub info: InfoConfig,
    pub newsletter: NewsletterConfig,
    pub testimonials: TestimonialsConfig,
    pub cta: CtaConfig,
    pub about: AboutConfig,
    pub faq: FaqConfig,
    pub footer: FooterConfig,
    /// Loading behavior of the optional sections.
    pub sections: SectionsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub company: CompanyInfo,
    /// Secondary-language site behind the language dropdown.
    pub korean_site_url: String,
    pub login_url: String,
    pub nav: Vec<NavItem>,
    pub quick_links: Vec<NavItem>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            company: content::company(),
            korean_site_url: content::KOREAN_SITE_URL.to_string(),
            login_url: content::LOGIN_URL.to_string(),
            nav: content::nav_items(),
            quick_links: content::quick_links(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
    /// Where the primary button navigates.
    pub primary_href: String,
    pub secondary_href: String,
    /// Only the first four are rendered.
    pub images: Vec<HeroImage>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "The significance of heritage and contemporary craft.".to_string(),
            subtitle: "A studio approach to furniture and materials \u{2014} where Korean tradition meets modern living.".to_string(),
            primary_button_text: "Discover the collection".to_string(),
            secondary_button_text: "Projects".to_string(),
            primary_href: "#shop".to_string(),
            secondary_href: "#projects".to_string(),
            images: content::hero_images(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionsConfig {
    pub title: String,
    pub description: String,
    pub items: Vec<Collection>,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            title: "Shop our collections".to_string(),
            description: "The importance of heritage, locality, and sustainability is the grounding vision for Eastern Edition.".to_string(),
            items: content::collections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    pub title: String,
    pub items: Vec<Project>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            items: content::projects(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfoConfig {
    pub items: Vec<InfoGridItem>,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            items: content::info_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsletterConfig {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            title: "Newsletter".to_string(),
            description: "Subscribe to our newsletter for stories and product updates.".to_string(),
            placeholder: "Enter your email".to_string(),
            button_text: "Subscribe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    pub title: String,
    pub description: String,
    /// Carousel entries. Must not be empty.
    pub items: Vec<Testimonial>,
    pub featured_projects: Vec<ProjectImage>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            title: "What our clients say".to_string(),
            description: "Stories from those who have experienced the significance of heritage and contemporary craft.".to_string(),
            items: content::testimonials(),
            featured_projects: content::featured_projects(),
        }
    }
}

/// Visual treatment of the call-to-action band. No behavioral difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    #[default]
    Light,
    Dark,
    Image,
}

impl CtaVariant {
    pub fn class(self) -> &'static str {
        match self {
            CtaVariant::Light => "cta-light",
            CtaVariant::Dark => "cta-dark",
            CtaVariant::Image => "cta-image",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CtaConfig {
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
    pub primary_href: String,
    pub secondary_href: String,
    pub variant: CtaVariant,
    /// Used only by the `image` variant.
    pub background_image: String,
    /// Disables the primary action and shows a spinner in place of its icon.
    pub loading: bool,
    /// Disables both actions.
    pub disabled: bool,
    pub trust_indicators: Vec<TrustIndicator>,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            title: "Elevate your space with timeless design".to_string(),
            description: "Discover furniture that bridges Korean heritage with contemporary living. Each piece tells a story of craftsmanship and authenticity.".to_string(),
            primary_button_text: "Schedule consultation".to_string(),
            secondary_button_text: "View collections".to_string(),
            primary_href: "#contact".to_string(),
            secondary_href: "#products".to_string(),
            variant: CtaVariant::Light,
            background_image:
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=1200&q=80"
                    .to_string(),
            loading: false,
            disabled: false,
            trust_indicators: content::trust_indicators(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub label: String,
    pub heading: String,
    /// Markdown, one entry per paragraph. The first renders as the lead.
    pub story: Vec<String>,
    pub image: String,
    pub image_alt: String,
    pub image_caption: String,
    pub stats: Vec<Stat>,
    pub values_heading: String,
    pub values: Vec<Value>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            label: "About".to_string(),
            heading: "Where Korean heritage meets contemporary design".to_string(),
            story: content::about_story(),
            image: content::about_image(),
            image_alt: "Master craftsperson carefully shaping traditional Korean furniture using time-honored woodworking techniques in Seoul studio".to_string(),
            image_caption: "Seoul Studio, 2024".to_string(),
            stats: content::stats(),
            values_heading: "Our values".to_string(),
            values: content::values(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqConfig {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Faq>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            title: "Frequently Asked Questions".to_string(),
            subtitle: "Everything you need to know about Eastern Edition furniture and our design process.".to_string(),
            items: content::faqs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub sections: Vec<FooterSection>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            sections: content::footer_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    /// Write testimonials, CTA, about and FAQ as separate fragments fetched
    /// after first paint. When false they are rendered inline.
    pub defer: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self { defer: true }
    }
}

/// Site palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Alternate band background (projects, newsletter).
    pub surface: String,
    pub text: String,
    /// Secondary copy: descriptions, captions, the loading placeholder.
    pub text_muted: String,
    pub border: String,
    /// Primary buttons and the dark CTA band.
    pub accent: String,
    pub error: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#111827".to_string(),
            error: "#b91c1c".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate list invariants the renderers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.testimonials.items.is_empty() {
            return Err(ConfigError::Validation(
                "testimonials.items must not be empty".into(),
            ));
        }
        unique_keys("site.nav", self.site.nav.iter().map(|n| &n.label))?;
        unique_keys(
            "site.quick_links",
            self.site.quick_links.iter().map(|n| &n.label),
        )?;
        unique_keys(
            "collections.items",
            self.collections.items.iter().map(|c| &c.title),
        )?;
        unique_keys(
            "projects.items",
            self.projects.items.iter().map(|p| &p.title),
        )?;
        unique_keys("info.items", self.info.items.iter().map(|i| &i.id))?;
        unique_keys(
            "testimonials.items",
            self.testimonials.items.iter().map(|t| t.id),
        )?;
        unique_keys(
            "testimonials.featured_projects",
            self.testimonials.featured_projects.iter().map(|p| &p.title),
        )?;
        unique_keys("about.stats", self.about.stats.iter().map(|s| &s.label))?;
        unique_keys("about.values", self.about.values.iter().map(|v| &v.title))?;
        unique_keys("faq.items", self.faq.items.iter().map(|f| f.id))?;
        unique_keys(
            "cta.trust_indicators",
            self.cta.trust_indicators.iter().map(|t| &t.id),
        )?;
        unique_keys(
            "footer.sections",
            self.footer.sections.iter().map(|s| &s.title),
        )?;
        Ok(())
    }
}

fn unique_keys<K: Eq + Hash + Display>(
    list: &str,
    keys: impl Iterator<Item = K>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for key in keys {
        if seen.contains(&key) {
            return Err(ConfigError::Validation(format!(
                "{list} has duplicate key \"{key}\""
            )));
        }
        seen.insert(key);
    }
    Ok(())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; anything else in `overlay` replaces the base
/// value outright, arrays included.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, falling back to
/// stock content for anything it does not set.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a commented stock `config.toml`.
///
/// Scalar settings are shown with their defaults. List content is shown
/// commented out, since configuring a list replaces the stock entries.
pub fn stock_config_toml() -> &'static str {
    r##"# Eastern Edition Site Configuration
# ==================================
# All settings are optional. Values shown are the defaults.
# Configuring a list (e.g. [[collections.items]]) replaces the stock list.
# Unknown keys will cause an error.

[site]
korean_site_url = "https://eastern-edition.co.kr"
login_url = "http://localhost/myapp/public/login.php"

[site.company]
name = "Eastern Edition"
address = "17, Eonju-ro 133-gil, Gangnam-gu, Seoul"
email = "contact@eastern-edition.com"

# [[site.nav]]
# label = "Products"
# href = "#products"

# ---------------------------------------------------------------------------
# Colors (CSS custom properties)
# ---------------------------------------------------------------------------
[colors]
background = "#ffffff"
surface = "#f9fafb"
text = "#111827"
text_muted = "#6b7280"
border = "#e5e7eb"
accent = "#111827"
error = "#b91c1c"

# ---------------------------------------------------------------------------
# Hero
# ---------------------------------------------------------------------------
[hero]
title = "The significance of heritage and contemporary craft."
primary_button_text = "Discover the collection"
secondary_button_text = "Projects"
primary_href = "#shop"
secondary_href = "#projects"

# Only the first four images are shown. loading = "eager" | "lazy"
# [[hero.images]]
# src = "https://images.unsplash.com/photo-1549187774-b4e9b0445b69?w=1200&q=80"
# alt = "Modern furniture piece showcasing Eastern Edition craftsmanship"
# loading = "eager"

# ---------------------------------------------------------------------------
# Collections, projects, info tiles
# ---------------------------------------------------------------------------
[collections]
title = "Shop our collections"

# [[collections.items]]
# title = "Sofa"
# img = "https://images.unsplash.com/photo-1549187774-b4e9b0445b69?w=800&q=60"
# alt = "A modern sofa with a minimalist design."
# href = "#sofa"

[projects]
title = "Projects"

# [[projects.items]]
# title = "Blue Bottle Seoul Studio"
# description = "Design and installation focused on material authenticity."
# image_url = "https://images.unsplash.com/photo-1523413651479-597eb2da0ad6?w=1200&q=60"

# [[info.items]]
# id = "philosophy"
# title = "Philosophy"
# description = "Bridging the past to the future: natural materials and slow craft."
# href = "#philosophy"
# link_text = "Learn more"   # optional, defaults to "Learn more"

# ---------------------------------------------------------------------------
# Newsletter
# ---------------------------------------------------------------------------
[newsletter]
title = "Newsletter"
description = "Subscribe to our newsletter for stories and product updates."
placeholder = "Enter your email"
button_text = "Subscribe"

# ---------------------------------------------------------------------------
# Optional sections
# ---------------------------------------------------------------------------
[sections]
# Fetch testimonials, call-to-action, about and FAQ after first paint.
defer = true

[testimonials]
title = "What our clients say"

# At least one entry is required when the list is configured.
# [[testimonials.items]]
# id = 1
# name = "Sarah Kim"
# title = "Interior Designer"
# company = "Studio Minimal"
# content = "Eastern Edition's approach to furniture design is truly exceptional."
# project = "Blue Bottle Seoul Studio"   # optional
# avatar = "https://images.unsplash.com/photo-1544005313-94efcd1e4860"   # optional
# avatar_alt = "Portrait of Sarah Kim"   # optional

[cta]
title = "Elevate your space with timeless design"
primary_button_text = "Schedule consultation"
secondary_button_text = "View collections"
primary_href = "#contact"
secondary_href = "#products"
# "light" | "dark" | "image"
variant = "light"
background_image = "https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=1200&q=80"
loading = false
disabled = false

[about]
label = "About"
heading = "Where Korean heritage meets contemporary design"
image_caption = "Seoul Studio, 2024"
values_heading = "Our values"
# Markdown paragraphs; the first is rendered as the lead.
# story = ["Founded in Seoul in 2018, ...", "Our studio approach ..."]

[faq]
title = "Frequently Asked Questions"

# [[faq.items]]
# id = 1
# question = "What materials do you use in your furniture?"
# answer = "We primarily use natural materials including solid wood ..."

# [[footer.sections]]
# title = "Products"
# links = [{ label = "Sofa", href = "#sofa" }, { label = "Chair", href = "#chair" }]
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-accent: {accent};
    --color-error: {error};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        accent = colors.accent,
        error = colors.error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_stock_content() {
        let config = SiteConfig::default();
        assert_eq!(config.collections.items.len(), 4);
        assert_eq!(config.testimonials.items.len(), 5);
        assert_eq!(config.faq.items.len(), 6);
        assert_eq!(config.site.company.name, "Eastern Edition");
        assert!(config.sections.defer);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[hero]
title = "Slow furniture."
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.hero.title, "Slow furniture.");
        // Untouched fields keep their defaults
        assert_eq!(config.hero.primary_button_text, "Discover the collection");
        assert_eq!(config.hero.images.len(), 4);
        assert_eq!(config.cta.variant, CtaVariant::Light);
    }

    #[test]
    fn parse_cta_variant() {
        let config: SiteConfig = toml::from_str("[cta]\nvariant = \"image\"").unwrap();
        assert_eq!(config.cta.variant, CtaVariant::Image);

        let result: Result<SiteConfig, _> = toml::from_str("[cta]\nvariant = \"neon\"");
        assert!(result.is_err());
    }

    #[test]
    fn configured_list_replaces_stock_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[[collections.items]]
title = "Lamp"
img = "https://example.com/lamp.jpg"
alt = "A paper lamp."
href = "#lamp"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.collections.items.len(), 1);
        assert_eq!(config.collections.items[0].title, "Lamp");
        assert_eq!(config.collections.title, "Shop our collections");
    }

    #[test]
    fn info_item_link_text_is_optional() {
        let toml = r##"
[[info.items]]
id = "press"
title = "Press"
description = "Coverage."
href = "#press"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.info.items[0].link_text(), "Learn more");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorScheme {
            background: "#f0f0f0".to_string(),
            ..ColorScheme::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-accent:"));
        assert!(css.contains("--color-error:"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.background, "#ffffff");
        assert_eq!(config.faq.items.len(), 6);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[colors]
background = "#123456"

[sections]
defer = false
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.background, "#123456");
        assert_eq!(config.colors.text, "#111827");
        assert!(!config.sections.defer);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[hero]
title = "a"
subtitle = "b"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str("[hero]\ntitle = \"c\"").unwrap();
        let merged = merge_toml(base, overlay);
        let hero = merged.get("hero").unwrap();
        assert_eq!(hero.get("title").unwrap().as_str(), Some("c"));
        assert_eq!(hero.get("subtitle").unwrap().as_str(), Some("b"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("items = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("items = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("items").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[hero]\ntitel = \"x\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[pricing]\nplan = \"pro\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_entity_field_rejected() {
        let toml = r#"
[[faq.items]]
id = 1
question = "q"
answer = "a"
votes = 3
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_testimonials() {
        let mut config = SiteConfig::default();
        config.testimonials.items.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("testimonials.items"));
    }

    #[test]
    fn validate_rejects_duplicate_faq_ids() {
        let mut config = SiteConfig::default();
        config.faq.items[1].id = config.faq.items[0].id;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("faq.items"));
        assert!(err.to_string().contains("\"1\""));
    }

    #[test]
    fn validate_rejects_duplicate_collection_titles() {
        let mut config = SiteConfig::default();
        config.collections.items[1].title = "Sofa".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    fn assert_duplicate(config: &SiteConfig, list: &str) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)) && err.to_string().contains(list),
            "expected duplicate in {list}, got {err}"
        );
    }

    #[test]
    fn validate_rejects_duplicate_project_titles() {
        let mut config = SiteConfig::default();
        config.projects.items[2].title = config.projects.items[0].title.clone();
        assert_duplicate(&config, "projects.items");
    }

    #[test]
    fn validate_rejects_duplicate_quick_links() {
        let mut config = SiteConfig::default();
        config.site.quick_links[1].label = config.site.quick_links[0].label.clone();
        assert_duplicate(&config, "site.quick_links");
    }

    #[test]
    fn validate_rejects_duplicate_featured_projects() {
        let mut config = SiteConfig::default();
        config.testimonials.featured_projects[1].title =
            config.testimonials.featured_projects[0].title.clone();
        assert_duplicate(&config, "testimonials.featured_projects");
    }

    #[test]
    fn validate_rejects_duplicate_stats() {
        let mut config = SiteConfig::default();
        config.about.stats[3].label = config.about.stats[0].label.clone();
        assert_duplicate(&config, "about.stats");
    }

    #[test]
    fn validate_rejects_duplicate_values() {
        let mut config = SiteConfig::default();
        config.about.values[1].title = "Heritage".to_string();
        assert_duplicate(&config, "about.values");
    }

    #[test]
    fn load_config_rejects_duplicate_project_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[[projects.items]]
title = "Same"
description = "First"
image_url = "https://img.test/a.jpg"

[[projects.items]]
title = "Same"
description = "Second"
image_url = "https://img.test/b.jpg"
"#,
        )
        .unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("projects.items has duplicate key \"Same\""));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[testimonials]\nitems = []").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.hero.title, defaults.hero.title);
        assert_eq!(config.cta.background_image, defaults.cta.background_image);
        assert_eq!(config.colors.accent, defaults.colors.accent);
        assert_eq!(config.about.heading, defaults.about.heading);
        assert_eq!(config.collections.items, defaults.collections.items);
        assert!(config.sections.defer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for key in [
            "site",
            "colors",
            "hero",
            "collections",
            "projects",
            "info",
            "newsletter",
            "testimonials",
            "cta",
            "about",
            "faq",
            "footer",
            "sections",
        ] {
            assert!(val.get(key).is_some(), "missing section {key}");
        }
    }
}
