//! Element ids for ARIA relationships.
//!
//! Ids come from a counter rather than random values so the server render
//! and the hydrating client produce the same ids when they build the same
//! view tree. `App` provides a fresh `PanelIds` for every render, so one
//! server request never shifts the numbering of the next. Panels mounted
//! without one fall back to a per-thread counter.

#[cfg(test)]
#[path = "dom_ids_test.rs"]
mod dom_ids_test;

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

thread_local! {
    static NEXT_PANEL: Cell<u64> = const { Cell::new(0) };
}

/// Id counter scoped to one app render.
#[derive(Clone, Debug, Default)]
pub struct PanelIds(Arc<AtomicU64>);

impl PanelIds {
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

/// Start a fresh id sequence for the current owner's subtree.
pub fn provide_panel_ids() -> PanelIds {
    let ids = PanelIds::default();
    provide_context(ids.clone());
    ids
}

/// Allocate a fresh panel id such as `overlay-panel-3`.
pub fn next_panel_id() -> String {
    let n = match use_context::<PanelIds>() {
        Some(ids) => ids.next(),
        None => NEXT_PANEL.with(|next| {
            let n = next.get();
            next.set(n + 1);
            n
        }),
    };
    format!("overlay-panel-{n}")
}

/// Id of the title element labelling `panel_id`.
pub fn title_id(panel_id: &str) -> String {
    format!("{panel_id}-title")
}
