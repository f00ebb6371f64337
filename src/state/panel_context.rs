//! Subtree-scoped open/close state shared by panel triggers and content.
//!
//! DESIGN
//! ======
//! A `PanelProvider` owns one reactive boolean and hands out a `Copy` handle
//! through Leptos context. Triggers and content subscribe by reading the
//! handle; the subscription ends with the reactive owner of the subtree, so
//! two providers never share state and nothing is global.

#[cfg(test)]
#[path = "panel_context_test.rs"]
mod panel_context_test;

use std::fmt;

use leptos::prelude::*;

use crate::error::PanelError;

/// Handle to one panel's requested open state.
#[derive(Clone, Copy)]
pub struct PanelContext {
    is_open: RwSignal<bool>,
}

impl PanelContext {
    pub fn new(default_open: bool) -> Self {
        Self { is_open: RwSignal::new(default_open) }
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open.get_untracked());
    }

    /// Reactive read; tracks the caller.
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.is_open.get_untracked()
    }

    pub fn signal(&self) -> Signal<bool> {
        self.is_open.into()
    }

    // Unchanged writes are skipped so repeated close() never re-notifies.
    fn set_open(&self, open: bool) {
        if self.is_open.get_untracked() != open {
            log::debug!("panel context open={open}");
            self.is_open.set(open);
        }
    }
}

impl fmt::Debug for PanelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelContext")
            .field("is_open", &self.is_open.try_get_untracked())
            .finish()
    }
}

/// Look up the nearest panel context.
///
/// # Errors
///
/// Returns [`PanelError::OutsideProvider`] when no `PanelProvider` is an
/// ancestor of the current owner.
pub fn try_use_panel_context(component: &'static str) -> Result<PanelContext, PanelError> {
    use_context::<PanelContext>().ok_or(PanelError::OutsideProvider { component })
}

/// Look up the nearest panel context, panicking when there is none.
///
/// # Panics
///
/// Panics when called outside a `PanelProvider`. That is a wiring bug, not a
/// runtime condition.
pub fn use_panel_context(component: &'static str) -> PanelContext {
    match try_use_panel_context(component) {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}

/// Run `original` (when present) and then `then`, each once per event.
pub fn compose_handlers<E, A, B>(original: Option<A>, then: B) -> impl Fn(E)
where
    E: Clone,
    A: Fn(E),
    B: Fn(E),
{
    move |ev: E| {
        if let Some(original) = &original {
            original(ev.clone());
        }
        then(ev);
    }
}
