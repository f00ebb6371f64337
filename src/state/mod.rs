//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Pure state machines and accounting live here so they can be tested
//! without a browser; components and `util` apply them to the DOM.

pub mod panel_context;
pub mod presence;
pub mod scroll_lock;
