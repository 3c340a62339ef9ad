//! Interactive behavior of the page as deterministic state machines.
//!
//! The browser script shipped with the site implements the same rules; these
//! types are the reference for it and the source of the states the renderers
//! draw. Everything is driven by a [`Host`]: tests dispatch events and advance
//! virtual time instead of waiting on a real clock.
//!
//! | Module | Component |
//! |--------|-----------|
//! | [`host`] | Event host, listener guards, virtual timers |
//! | [`timer`] | Single-slot timer ownership |
//! | [`header`] | Language menu, mobile drawer, scrolled flag |
//! | [`newsletter`] | Signup form and the subscription collaborator |
//! | [`accordion`] | FAQ single-select accordion |
//! | [`carousel`] | Testimonial carousel |
//! | [`deferred`] | Load states of the optional sections |

pub mod accordion;
pub mod carousel;
pub mod deferred;
pub mod header;
pub mod host;
pub mod newsletter;
pub mod timer;

pub use accordion::Accordion;
pub use carousel::{Carousel, CarouselState};
pub use deferred::{DeferredBoundary, LoadState, OptionalSection};
pub use header::{Header, HeaderState};
pub use host::Host;
pub use newsletter::FormState;
