//! Panel configuration surface.
//!
//! DESIGN
//! ======
//! Everything a caller can tune on an overlay panel lives in `PanelConfig`
//! so the state machine and the component read one plain value. Configs are
//! serde types so pages can ship panel presets as JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Exit animation length used when a config does not override it.
pub const DEFAULT_ANIMATION_MS: u32 = 300;

/// Viewport edge the panel slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Inline start (left in LTR layouts).
    #[serde(alias = "left")]
    Start,
    /// Inline end (right in LTR layouts).
    #[default]
    #[serde(alias = "right")]
    End,
    Top,
    Bottom,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(Self::Start),
            "end" | "right" => Ok(Self::End),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(PanelError::UnknownEdge(s.to_owned())),
        }
    }
}

/// Size class of the panel along its sliding axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl PanelSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelSize {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "full" => Ok(Self::Full),
            _ => Err(PanelError::UnknownSize(s.to_owned())),
        }
    }
}

/// How concurrent panels share the document scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollLockPolicy {
    /// Any release unlocks the document, even if another panel still holds it.
    #[default]
    LastRelease,
    /// The document stays locked until every holder has released.
    Counted,
}

impl FromStr for ScrollLockPolicy {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-release" => Ok(Self::LastRelease),
            "counted" => Ok(Self::Counted),
            _ => Err(PanelError::UnknownScrollPolicy(s.to_owned())),
        }
    }
}

/// Per-panel configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub edge: Edge,
    pub size: PanelSize,
    pub close_on_click_outside: bool,
    pub close_on_escape: bool,
    pub prevent_scroll: bool,
    pub show_close_button: bool,
    /// Delay between logical close and removal of the panel node.
    pub animation_ms: u32,
    /// Collapse `animation_ms` to zero when the user prefers reduced motion.
    pub respect_reduced_motion: bool,
    /// Extra class appended to the panel body.
    pub class: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            edge: Edge::End,
            size: PanelSize::Md,
            close_on_click_outside: true,
            close_on_escape: true,
            prevent_scroll: true,
            show_close_button: true,
            animation_ms: DEFAULT_ANIMATION_MS,
            respect_reduced_motion: true,
            class: None,
        }
    }
}

impl PanelConfig {
    /// Decode a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidConfig`] when the JSON is malformed or a
    /// field has the wrong type or an unknown variant name.
    pub fn from_json(raw: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: PanelSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_close_on_click_outside(mut self, enabled: bool) -> Self {
        self.close_on_click_outside = enabled;
        self
    }

    #[must_use]
    pub fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    #[must_use]
    pub fn with_prevent_scroll(mut self, enabled: bool) -> Self {
        self.prevent_scroll = enabled;
        self
    }

    #[must_use]
    pub fn with_close_button(mut self, enabled: bool) -> Self {
        self.show_close_button = enabled;
        self
    }

    #[must_use]
    pub fn with_animation_ms(mut self, ms: u32) -> Self {
        self.animation_ms = ms;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Exit delay to apply given the user's motion preference.
    pub fn effective_animation_ms(&self, prefers_reduced_motion: bool) -> u32 {
        if self.respect_reduced_motion && prefers_reduced_motion { 0 } else { self.animation_ms }
    }

    /// Class list for the panel body element.
    pub fn panel_class(&self) -> String {
        let mut class = format!("overlay-panel overlay-panel--{} overlay-panel--{}", self.edge, self.size);
        if let Some(extra) = self.class.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }
}

/// User-level UI preferences persisted in browser storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    /// Explicit reduced-motion choice. `None` defers to the system setting.
    pub reduce_motion: Option<bool>,
}
