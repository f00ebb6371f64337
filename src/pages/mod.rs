//! Routed pages.

pub mod showcase;
