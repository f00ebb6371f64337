//! Error types for panel wiring and configuration.
//!
//! ERROR HANDLING
//! ==============
//! `OutsideProvider` is a wiring mistake and is surfaced by panicking in
//! `use_panel_context`. The parse variants are ordinary `Result` errors for
//! callers that build a `PanelConfig` from strings or JSON.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by panel context lookup and config parsing.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A panel component looked up its context with no `PanelProvider` above it.
    #[error("{component} must be used inside a PanelProvider")]
    OutsideProvider { component: &'static str },
    /// The edge name is not one of `start`, `end`, `top`, `bottom`.
    #[error("unknown panel edge: {0}")]
    UnknownEdge(String),
    /// The size name is not one of `sm`, `md`, `lg`, `xl`, `full`.
    #[error("unknown panel size: {0}")]
    UnknownSize(String),
    /// The scroll lock policy name is not `last-release` or `counted`.
    #[error("unknown scroll lock policy: {0}")]
    UnknownScrollPolicy(String),
    /// The JSON panel config could not be decoded.
    #[error("invalid panel config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
