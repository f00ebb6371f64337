//! # homefix-ui
//!
//! Leptos + WASM UI layer for the HomeFix services marketplace.
//!
//! The core is the overlay panel (drawer) primitive shared by the cart,
//! filter, chat and notification drawers: a presence state machine that
//! lags visibility behind the open flag for exit animations, a subtree
//! `PanelContext` with trigger/content components, and RAII guards over the
//! document-wide scroll lock and Escape handling.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

pub use components::overlay_panel::OverlayPanel;
pub use components::panel_trigger::{PanelClose, PanelContent, PanelProvider, PanelTrigger};
pub use config::{Edge, PanelConfig, PanelSize, ScrollLockPolicy};
pub use error::PanelError;
pub use state::panel_context::{PanelContext, try_use_panel_context, use_panel_context};

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
