//! The event host: an in-process stand-in for the browser window and document.
//!
//! Components never talk to each other. They talk to the [`Host`], which owns
//! everything global to the page:
//!
//! - the clock (virtual, advanced explicitly with [`Host::advance`])
//! - the vertical scroll position
//! - classes on the document body
//! - listeners for scroll, pointer-down and key-down events
//! - pending timers
//!
//! Dispatch is single-threaded and one event at a time. Handlers and timer
//! callbacks are invoked with no borrow of the host held, so they may freely
//! schedule timers, register listeners or touch body classes.
//!
//! Listener registration returns a [`ListenerGuard`]; dropping the guard
//! detaches the listener. Components keep their guards for as long as they
//! are mounted, which ties listener lifetime to component lifetime.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Char(char),
}

/// Where a pointer press landed, resolved against the regions components
/// register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The language switch button and its dropdown.
    LanguageMenu,
    /// The mobile navigation drawer (not its overlay or toggle button).
    MobileMenu,
    /// Anywhere else on the page.
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Scroll,
    PointerDown(Region),
    KeyDown(Key),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Scroll => EventKind::Scroll,
            Event::PointerDown(_) => EventKind::PointerDown,
            Event::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Scroll,
    PointerDown,
    KeyDown,
}

type Handler = Rc<dyn Fn(&Host, &Event)>;
type Callback = Box<dyn FnOnce(&Host)>;

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Handler,
}

struct Timer {
    id: u64,
    deadline: Duration,
    callback: Callback,
}

#[derive(Default)]
struct HostInner {
    now: Duration,
    scroll_y: f64,
    body_classes: BTreeSet<String>,
    listeners: Vec<Listener>,
    timers: Vec<Timer>,
    next_id: u64,
}

impl HostInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// Detaches its listener when dropped.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard {
    host: Weak<RefCell<HostInner>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.host.upgrade() {
            inner.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

/// Shared handle to the page host. Cloning is cheap and yields the same host.
#[derive(Clone, Default)]
pub struct Host {
    inner: Rc<RefCell<HostInner>>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the host was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn listen(
        &self,
        kind: EventKind,
        handler: impl Fn(&Host, &Event) + 'static,
    ) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.listeners.push(Listener {
            id,
            kind,
            handler: Rc::new(handler),
        });
        ListenerGuard {
            host: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Deliver `event` to every listener registered for its kind, in
    /// registration order.
    pub fn dispatch(&self, event: Event) {
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind())
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in handlers {
            handler(self, &event);
        }
    }

    /// Move the viewport and fire a scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
        self.dispatch(Event::Scroll);
    }

    pub fn pointer_down(&self, region: Region) {
        self.dispatch(Event::PointerDown(region));
    }

    pub fn key_down(&self, key: Key) {
        self.dispatch(Event::KeyDown(key));
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    pub fn set_timeout(
        &self,
        delay: Duration,
        callback: impl FnOnce(&Host) + 'static,
    ) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        let deadline = inner.now + delay;
        inner.timers.push(Timer {
            id,
            deadline,
            callback: Box::new(callback),
        });
        TimerHandle(id)
    }

    /// Cancel a timer. Cancelling a timer that already fired is a no-op.
    pub fn clear_timeout(&self, handle: TimerHandle) {
        self.inner.borrow_mut().timers.retain(|t| t.id != handle.0);
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.inner.borrow().timers.iter().any(|t| t.id == handle.0)
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Advance the clock by `by`, firing every timer whose deadline falls
    /// inside the window in deadline order (ties in scheduling order).
    ///
    /// Timers scheduled by a callback fire in the same call if their
    /// deadline is still inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(timer) = self.pop_due(target) {
            self.inner.borrow_mut().now = timer.deadline;
            (timer.callback)(self);
        }
        self.inner.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= target)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        Some(inner.timers.remove(index))
    }

    // ------------------------------------------------------------------
    // Document body
    // ------------------------------------------------------------------

    pub fn add_body_class(&self, class: &str) {
        self.inner.borrow_mut().body_classes.insert(class.to_string());
    }

    pub fn remove_body_class(&self, class: &str) {
        self.inner.borrow_mut().body_classes.remove(class);
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.inner.borrow().body_classes.contains(class)
    }
}
