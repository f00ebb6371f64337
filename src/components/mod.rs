//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `overlay_panel` is the drawer primitive; `panel_trigger` binds it to a
//! `PanelContext` so any descendant can open or close it.

pub mod overlay_panel;
pub mod panel_trigger;
