//! Single-slot timer ownership.
//!
//! A component that defers work owns one [`TimerSlot`] per concern. The slot
//! holds at most one pending timer: scheduling through [`TimerSlot::replace`]
//! cancels whatever was pending first, so deferred callbacks for the same
//! concern never stack.

use super::host::{Host, TimerHandle};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<TimerHandle>,
}

impl TimerSlot {
    /// True while the slot's timer is scheduled and has not fired.
    pub fn is_pending(&self, host: &Host) -> bool {
        self.handle.is_some_and(|h| host.is_scheduled(h))
    }

    /// Cancel any pending timer and schedule `callback` after `delay`.
    pub fn replace(
        &mut self,
        host: &Host,
        delay: Duration,
        callback: impl FnOnce(&Host) + 'static,
    ) {
        self.cancel(host);
        self.handle = Some(host.set_timeout(delay, callback));
    }

    /// Schedule `callback` only if nothing is pending. Returns whether it
    /// was scheduled.
    pub fn schedule_if_idle(
        &mut self,
        host: &Host,
        delay: Duration,
        callback: impl FnOnce(&Host) + 'static,
    ) -> bool {
        if self.is_pending(host) {
            return false;
        }
        self.handle = Some(host.set_timeout(delay, callback));
        true
    }

    pub fn cancel(&mut self, host: &Host) {
        if let Some(handle) = self.handle.take() {
            host.clear_timeout(handle);
        }
    }
}
