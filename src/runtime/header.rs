//! Header interaction state.
//!
//! Three independent flags: language menu open, mobile menu open, and whether
//! the page has scrolled past [`SCROLL_THRESHOLD`]. A mounted [`Header`]
//! listens for scroll, pointer-down and key-down events on the host:
//!
//! - Scroll events are throttled. The first event schedules a check
//!   [`SCROLL_THROTTLE`] later; events arriving while that check is pending
//!   are dropped. The check reads the scroll position current when it fires.
//! - A pointer press outside a menu's region closes that menu.
//! - Escape closes both menus wherever focus is.
//!
//! While the mobile menu is open the body carries [`NO_SCROLL_CLASS`].
//! Dropping the header detaches its listeners, cancels a pending scroll
//! check, and always removes the scroll lock.

use super::host::{Event, EventKind, Host, Key, ListenerGuard, Region};
use super::timer::TimerSlot;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::debug;

pub const SCROLL_THRESHOLD: f64 = 10.0;
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);
pub const NO_SCROLL_CLASS: &str = "no-scroll";

/// Snapshot of the header flags, consumed by the header renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub is_lang_open: bool,
    pub is_mobile_menu_open: bool,
    pub is_scrolled: bool,
}

#[derive(Default)]
struct Inner {
    state: HeaderState,
    throttle: TimerSlot,
    scroll_checks: usize,
}

pub struct Header {
    host: Host,
    inner: Rc<RefCell<Inner>>,
    _listeners: Vec<ListenerGuard>,
}

impl Header {
    /// Attach the header to `host`.
    pub fn mount(host: &Host) -> Self {
        let inner = Rc::new(RefCell::new(Inner::default()));

        let weak = Rc::downgrade(&inner);
        let scroll = host.listen(EventKind::Scroll, move |host, _| on_scroll(host, &weak));

        let weak = Rc::downgrade(&inner);
        let dismiss = move |host: &Host, event: &Event| {
            if let Some(inner) = weak.upgrade() {
                on_dismiss(host, &inner, event);
            }
        };
        let pointer = host.listen(EventKind::PointerDown, dismiss.clone());
        let keys = host.listen(EventKind::KeyDown, dismiss);

        Self {
            host: host.clone(),
            inner,
            _listeners: vec![scroll, pointer, keys],
        }
    }

    pub fn state(&self) -> HeaderState {
        self.inner.borrow().state
    }

    /// How many times the scrolled flag has been recomputed.
    pub fn scroll_checks(&self) -> usize {
        self.inner.borrow().scroll_checks
    }

    pub fn toggle_lang_menu(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.state.is_lang_open = !inner.state.is_lang_open;
    }

    pub fn toggle_mobile_menu(&self) {
        let open = !self.state().is_mobile_menu_open;
        set_mobile_menu(&self.host, &self.inner, open);
    }

    /// A link, the cart button or the overlay inside the mobile drawer was
    /// clicked.
    pub fn close_mobile_menu(&self) {
        set_mobile_menu(&self.host, &self.inner, false);
    }
}

impl Drop for Header {
    fn drop(&mut self) {
        self.inner.borrow_mut().throttle.cancel(&self.host);
        self.host.remove_body_class(NO_SCROLL_CLASS);
    }
}

fn on_scroll(host: &Host, weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let check = weak.clone();
    inner
        .borrow_mut()
        .throttle
        .schedule_if_idle(host, SCROLL_THROTTLE, move |host| {
            if let Some(inner) = check.upgrade() {
                let mut inner = inner.borrow_mut();
                inner.state.is_scrolled = host.scroll_y() > SCROLL_THRESHOLD;
                inner.scroll_checks += 1;
                debug!(
                    scroll_y = host.scroll_y(),
                    scrolled = inner.state.is_scrolled,
                    "scroll check"
                );
            }
        });
}

fn on_dismiss(host: &Host, inner: &Rc<RefCell<Inner>>, event: &Event) {
    let state = inner.borrow().state;
    match event {
        Event::PointerDown(region) => {
            if state.is_lang_open && *region != Region::LanguageMenu {
                inner.borrow_mut().state.is_lang_open = false;
            }
            if state.is_mobile_menu_open && *region != Region::MobileMenu {
                set_mobile_menu(host, inner, false);
            }
        }
        Event::KeyDown(Key::Escape) => {
            inner.borrow_mut().state.is_lang_open = false;
            set_mobile_menu(host, inner, false);
        }
        _ => {}
    }
}

fn set_mobile_menu(host: &Host, inner: &Rc<RefCell<Inner>>, open: bool) {
    inner.borrow_mut().state.is_mobile_menu_open = open;
    if open {
        host.add_body_class(NO_SCROLL_CLASS);
    } else {
        host.remove_body_class(NO_SCROLL_CLASS);
    }
}
