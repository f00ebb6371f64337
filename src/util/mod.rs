//! Browser-facing helpers shared by panel components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate document-wide concerns (scroll, keys, focus,
//! timers, preferences) from component logic. Each degrades to a no-op
//! outside the `hydrate` build.

pub mod body_scroll;
pub mod dom_ids;
pub mod escape_keys;
pub mod focus;
pub mod hide_timer;
pub mod motion;
