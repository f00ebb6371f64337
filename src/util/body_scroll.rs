//! Document-wide scroll lock for open overlay panels.
//!
//! Each open panel holds a `ScrollLockGuard`. Dropping the guard releases the
//! hold, so a panel that unmounts while open can never leave `<body>` stuck
//! unscrollable. When and whether the body unlocks is decided by the shared
//! `ScrollLockRegistry` and its policy.
//!
//! TRADE-OFFS
//! ==========
//! The registry is thread-local: the browser runs all UI on one thread and
//! the lock mirrors a single document. SSR and native tests keep the
//! accounting but skip the style writes.

#[cfg(test)]
#[path = "body_scroll_test.rs"]
mod body_scroll_test;

use std::cell::RefCell;

use crate::config::ScrollLockPolicy;
use crate::state::scroll_lock::{LockChange, ScrollLockRegistry};

thread_local! {
    static REGISTRY: RefCell<ScrollLockRegistry> = RefCell::new(ScrollLockRegistry::default());
    // `overflow` value of <body> before the first lock, restored on unlock.
    static SAVED_OVERFLOW: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Choose how concurrent panels share the lock. Call once at startup.
pub fn configure(policy: ScrollLockPolicy) {
    REGISTRY.with_borrow_mut(|registry| registry.set_policy(policy));
}

pub fn policy() -> ScrollLockPolicy {
    REGISTRY.with_borrow(ScrollLockRegistry::policy)
}

/// Whether the document is currently scroll-locked.
pub fn is_locked() -> bool {
    REGISTRY.with_borrow(ScrollLockRegistry::is_locked)
}

/// Number of live guards.
pub fn holders() -> usize {
    REGISTRY.with_borrow(ScrollLockRegistry::holders)
}

/// Take a hold on the scroll lock until the guard is dropped.
pub fn acquire() -> ScrollLockGuard {
    let change = REGISTRY.with_borrow_mut(ScrollLockRegistry::acquire);
    apply(change);
    ScrollLockGuard { _private: () }
}

/// Holds the document scroll lock while alive.
#[derive(Debug)]
pub struct ScrollLockGuard {
    _private: (),
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        // The registry may already be gone during thread teardown.
        let change = REGISTRY
            .try_with(|registry| registry.borrow_mut().release())
            .unwrap_or(LockChange::Unchanged);
        apply(change);
    }
}

fn apply(change: LockChange) {
    match change {
        LockChange::Unchanged => {}
        LockChange::Lock => {
            log::debug!("body scroll locked");
            let previous = set_body_overflow(Some("hidden"));
            let _ = SAVED_OVERFLOW.try_with(|saved| *saved.borrow_mut() = previous);
        }
        LockChange::Unlock => {
            log::debug!("body scroll restored");
            let previous = SAVED_OVERFLOW
                .try_with(|saved| saved.borrow_mut().take())
                .ok()
                .flatten();
            set_body_overflow(previous.as_deref());
        }
    }
}

/// Write `overflow` on `<body>` (`None` removes it) and return the old value.
fn set_body_overflow(value: Option<&str>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())?;
        let style = body.style();
        let previous = style
            .get_property_value("overflow")
            .ok()
            .filter(|v| !v.is_empty());
        let result = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if result.is_err() {
            log::warn!("failed to update body overflow");
        }
        previous
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
        None
    }
}
