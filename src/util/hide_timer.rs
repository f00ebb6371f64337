//! Cancellable one-shot timer for the panel exit delay.
//!
//! Scheduling replaces (and cancels) any timer already pending, and dropping
//! the `HideTimer` cancels too, so a disposed panel never receives a late
//! callback. A timer that already fired stays parked until the next
//! schedule, cancel or drop.
//!
//! Outside the browser there is no clock: the callback is parked and only
//! runs when a test takes it out. SSR never closes a panel.

#[cfg(test)]
#[path = "hide_timer_test.rs"]
mod hide_timer_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct HideTimer {
    #[cfg(feature = "hydrate")]
    pending: Option<Timeout>,
    #[cfg(not(feature = "hydrate"))]
    pending: Option<Box<dyn FnOnce()>>,
}

impl HideTimer {
    /// Run `callback` after `delay_ms`, replacing any pending timer.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            // Dropping a gloo Timeout clears it.
            self.pending = Some(Timeout::new(delay_ms, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            self.pending = Some(Box::new(callback));
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the parked callback so the caller can "fire" it.
    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn take_pending(&mut self) -> Option<Box<dyn FnOnce()>> {
        self.pending.take()
    }
}
