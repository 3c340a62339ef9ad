//! Load states for the optional sections below the newsletter form.
//!
//! Each optional section sits behind a [`DeferredBoundary`]. The boundary
//! moves `NotLoaded → Loading → Loaded | Failed` exactly once; a settled
//! boundary ignores further resolution. What "loading" means is up to the
//! [`SectionLoader`]: rendering inline, or writing a fragment file and
//! handing back the placeholder that fetches it.

use maud::Markup;
use thiserror::Error;
use tracing::warn;

/// The sections rendered behind a deferred boundary, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalSection {
    Testimonials,
    CallToAction,
    About,
    Faq,
}

impl OptionalSection {
    pub const ALL: [OptionalSection; 4] = [
        OptionalSection::Testimonials,
        OptionalSection::CallToAction,
        OptionalSection::About,
        OptionalSection::Faq,
    ];

    /// File stem of the section's fragment and its anchor id.
    pub fn slug(self) -> &'static str {
        match self {
            OptionalSection::Testimonials => "testimonials",
            OptionalSection::CallToAction => "cta",
            OptionalSection::About => "about",
            OptionalSection::Faq => "faq",
        }
    }

    /// Accessible name of the section wrapper.
    pub fn label(self) -> &'static str {
        match self {
            OptionalSection::Testimonials => "Testimonials",
            OptionalSection::CallToAction => "Call to Action",
            OptionalSection::About => "About Us",
            OptionalSection::Faq => "FAQ",
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Unavailable(String),
}

pub trait SectionLoader {
    fn load(&mut self, section: OptionalSection) -> Result<Markup, LoadError>;
}

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Markup),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DeferredBoundary {
    section: OptionalSection,
    state: LoadState,
}

impl DeferredBoundary {
    pub fn new(section: OptionalSection) -> Self {
        Self {
            section,
            state: LoadState::NotLoaded,
        }
    }

    pub fn section(&self) -> OptionalSection {
        self.section
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    /// Enter `Loading`. Only valid from `NotLoaded`; otherwise a no-op.
    pub fn start(&mut self) {
        if matches!(self.state, LoadState::NotLoaded) {
            self.state = LoadState::Loading;
        }
    }

    /// Settle the boundary with the loader's outcome. Failures are logged and
    /// kept as the fallback reason.
    pub fn resolve(&mut self, result: Result<Markup, LoadError>) {
        if self.is_settled() {
            return;
        }
        self.state = match result {
            Ok(markup) => LoadState::Loaded(markup),
            Err(e) => {
                warn!(section = self.section.slug(), error = %e, "deferred section failed to load");
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn load(&mut self, loader: &mut dyn SectionLoader) {
        self.start();
        if !self.is_settled() {
            let result = loader.load(self.section);
            self.resolve(result);
        }
    }
}

/// Build and settle a boundary for every optional section, in page order.
pub fn load_all(loader: &mut dyn SectionLoader) -> Vec<DeferredBoundary> {
    OptionalSection::ALL
        .iter()
        .map(|&section| {
            let mut boundary = DeferredBoundary::new(section);
            boundary.load(loader);
            boundary
        })
        .collect()
}
