//! Document-level Escape key dispatch for open panels.
//!
//! Panels register a dismiss handler while they are open and dismissible by
//! Escape. The returned `EscapeRegistration` removes exactly that handler on
//! drop, so one panel unmounting never disarms another. A single window
//! `keydown` listener is attached while at least one handler is registered
//! and detached when the last one goes away.

#[cfg(test)]
#[path = "escape_keys_test.rs"]
mod escape_keys_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::{WindowListenerHandle, window_event_listener};

pub const ESCAPE_KEY: &str = "Escape";

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    #[cfg(feature = "hydrate")]
    listener: Option<WindowListenerHandle>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Arm `handler` for Escape presses until the registration is dropped.
pub fn register(handler: impl Fn() + 'static) -> EscapeRegistration {
    let handler: Handler = Rc::new(handler);
    let id = REGISTRY.with_borrow_mut(|registry| {
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, handler));
        #[cfg(feature = "hydrate")]
        {
            if registry.listener.is_none() {
                registry.listener = Some(window_event_listener(leptos::ev::keydown, |ev| {
                    dispatch_key(&ev.key());
                }));
            }
        }
        id
    });
    EscapeRegistration { id }
}

/// Route a key press to the armed handlers. Returns how many ran.
pub fn dispatch_key(key: &str) -> usize {
    if key != ESCAPE_KEY {
        return 0;
    }
    // Clone out first: a handler may drop registrations while running.
    let handlers: Vec<Handler> = REGISTRY.with_borrow(|registry| {
        registry.handlers.iter().map(|(_, handler)| Rc::clone(handler)).collect()
    });
    for handler in &handlers {
        handler();
    }
    handlers.len()
}

/// Number of armed handlers.
pub fn armed_count() -> usize {
    REGISTRY.with_borrow(|registry| registry.handlers.len())
}

/// Keeps one Escape handler armed while alive.
#[derive(Debug)]
pub struct EscapeRegistration {
    id: u64,
}

impl Drop for EscapeRegistration {
    fn drop(&mut self) {
        let _ = REGISTRY.try_with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.handlers.retain(|(id, _)| *id != self.id);
            #[cfg(feature = "hydrate")]
            {
                if registry.handlers.is_empty() {
                    if let Some(listener) = registry.listener.take() {
                        listener.remove();
                    }
                }
            }
        });
    }
}
