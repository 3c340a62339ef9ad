//! Testimonial carousel state.
//!
//! Navigation is deferred by [`TRANSITION_DELAY`] so the exit animation can
//! play: the carousel flags itself as animating, waits, then applies the new
//! index and clears the flag.
//!
//! Only one transition is ever pending. A navigation that arrives while one
//! is pending cancels it and restarts the delay. Relative moves compose from
//! the pending target rather than the displayed index, so two quick presses
//! of "next" settle two entries ahead and a jump always settles where it was
//! aimed.
//!
//! A mounted carousel listens for ArrowLeft / ArrowRight anywhere on the
//! page. Dropping it detaches the listener and cancels the pending
//! transition.

use super::host::{Event, EventKind, Host, Key, ListenerGuard};
use super::timer::TimerSlot;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub const TRANSITION_DELAY: Duration = Duration::from_millis(250);

/// Snapshot consumed by the testimonials renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub animating: bool,
}

struct Inner {
    state: CarouselState,
    len: usize,
    pending: Option<usize>,
    transition: TimerSlot,
}

pub struct Carousel {
    host: Host,
    inner: Rc<RefCell<Inner>>,
    _keys: ListenerGuard,
}

impl Carousel {
    /// Attach a carousel over `len` entries.
    ///
    /// # Panics
    ///
    /// If `len` is zero. Configuration validation rejects empty testimonial
    /// lists before a carousel is built.
    pub fn mount(host: &Host, len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one entry");
        let inner = Rc::new(RefCell::new(Inner {
            state: CarouselState::default(),
            len,
            pending: None,
            transition: TimerSlot::default(),
        }));

        let weak = Rc::downgrade(&inner);
        let keys = host.listen(EventKind::KeyDown, move |host, event| match event {
            Event::KeyDown(Key::ArrowRight) => navigate(host, &weak, |i, len| (i + 1) % len),
            Event::KeyDown(Key::ArrowLeft) => navigate(host, &weak, |i, len| (i + len - 1) % len),
            _ => {}
        });

        Self {
            host: host.clone(),
            inner,
            _keys: keys,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.inner.borrow().state
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index the pending transition will settle on, if one is pending.
    pub fn pending_target(&self) -> Option<usize> {
        self.inner.borrow().pending
    }

    pub fn next(&self) {
        navigate(&self.host, &Rc::downgrade(&self.inner), |i, len| (i + 1) % len);
    }

    pub fn prev(&self) {
        navigate(&self.host, &Rc::downgrade(&self.inner), |i, len| {
            (i + len - 1) % len
        });
    }

    /// Jump to `index` (taken modulo the entry count).
    pub fn go_to(&self, index: usize) {
        navigate(&self.host, &Rc::downgrade(&self.inner), move |_, len| index % len);
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.inner.borrow_mut().transition.cancel(&self.host);
    }
}

fn navigate(host: &Host, weak: &Weak<RefCell<Inner>>, step: impl FnOnce(usize, usize) -> usize) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut guard = inner.borrow_mut();
    let base = guard.pending.unwrap_or(guard.state.current);
    let target = step(base, guard.len);
    guard.pending = Some(target);
    guard.state.animating = true;

    let settle = weak.clone();
    guard.transition.replace(host, TRANSITION_DELAY, move |_| {
        if let Some(inner) = settle.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.state.current = target;
            inner.state.animating = false;
            inner.pending = None;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(host: &Host) {
        host.advance(TRANSITION_DELAY);
    }

    fn at(host: &Host, carousel: &Carousel, index: usize) {
        carousel.go_to(index);
        settle(host);
        assert_eq!(carousel.state().current, index);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);

        carousel.prev();
        settle(&host);

        assert_eq!(carousel.state().current, 4);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);
        at(&host, &carousel, 4);

        carousel.next();
        settle(&host);

        assert_eq!(carousel.state().current, 0);
    }

    #[test]
    fn go_to_settles_on_target_from_anywhere() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);
        for start in 0..5 {
            at(&host, &carousel, start);
            carousel.go_to(2);
            settle(&host);
            assert_eq!(carousel.state().current, 2);
        }
    }

    #[test]
    fn index_changes_only_after_delay() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);

        carousel.next();
        assert_eq!(
            carousel.state(),
            CarouselState {
                current: 0,
                animating: true
            }
        );

        host.advance(TRANSITION_DELAY - Duration::from_millis(1));
        assert_eq!(carousel.state().current, 0);

        host.advance(Duration::from_millis(1));
        assert_eq!(
            carousel.state(),
            CarouselState {
                current: 1,
                animating: false
            }
        );
    }

    #[test]
    fn rapid_navigation_restarts_single_transition() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);

        carousel.next();
        host.advance(Duration::from_millis(200));
        carousel.next();
        assert_eq!(host.pending_timers(), 1);
        assert_eq!(carousel.pending_target(), Some(2));

        // The first deadline passes without effect: it was cancelled.
        host.advance(Duration::from_millis(100));
        assert_eq!(carousel.state().current, 0);
        assert!(carousel.state().animating);

        host.advance(Duration::from_millis(150));
        assert_eq!(carousel.state().current, 2);
        assert!(!carousel.state().animating);
    }

    #[test]
    fn jump_mid_transition_wins() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);

        carousel.next();
        carousel.next();
        carousel.go_to(0);
        settle(&host);

        assert_eq!(carousel.state().current, 0);
    }

    #[test]
    fn arrow_keys_navigate_globally() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 3);

        host.key_down(Key::ArrowRight);
        settle(&host);
        assert_eq!(carousel.state().current, 1);

        host.key_down(Key::ArrowLeft);
        host.key_down(Key::ArrowLeft);
        settle(&host);
        assert_eq!(carousel.state().current, 2);

        host.key_down(Key::Escape);
        assert!(!carousel.state().animating);
    }

    #[test]
    fn single_entry_stays_put() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 1);
        carousel.next();
        carousel.prev();
        settle(&host);
        assert_eq!(carousel.state().current, 0);
    }

    #[test]
    fn unmount_cancels_transition_and_listener() {
        let host = Host::new();
        let carousel = Carousel::mount(&host, 5);
        carousel.next();

        drop(carousel);

        assert_eq!(host.pending_timers(), 0);
        assert_eq!(host.listener_count(EventKind::KeyDown), 0);
        host.key_down(Key::ArrowRight);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one entry")]
    fn empty_carousel_is_rejected() {
        let host = Host::new();
        let _ = Carousel::mount(&host, 0);
    }
}
