//! Focus containment for modal panels.
//!
//! While a panel is open, Tab and Shift+Tab cycle through the focusable
//! elements inside it instead of escaping to the page underneath. When the
//! panel closes, focus goes back to whatever was focused before it opened.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Elements that take part in Tab order inside a panel.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Index to focus next when Tab is pressed inside a panel with `count`
/// focusable elements. `current` is `None` when focus is outside them.
pub fn next_focus_index(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (Some(i), false) if i < count => (i + 1) % count,
        (Some(i), true) if i < count => (i + count - 1) % count,
        (_, false) => 0,
        (_, true) => count - 1,
    };
    Some(next)
}

/// Element focused before a panel opened, restored on close.
#[derive(Default)]
pub struct FocusReturn {
    #[cfg(feature = "hydrate")]
    target: Option<web_sys::HtmlElement>,
}

impl FocusReturn {
    /// Capture the currently focused element.
    pub fn capture() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let target = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            Self { target }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Move focus back to the captured element, if it still exists.
    pub fn restore(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = self.target {
                if target.is_connected() && target.focus().is_err() {
                    log::warn!("failed to restore focus after panel close");
                }
            }
        }
    }
}

/// Move focus into `panel` unless it already contains the focused element.
#[cfg(feature = "hydrate")]
pub fn focus_panel(panel: &web_sys::HtmlElement) {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let already_inside = active.as_ref().is_some_and(|el| panel.contains(Some(el)));
    if !already_inside && panel.focus().is_err() {
        log::warn!("failed to focus overlay panel");
    }
}

/// Move focus to the next focusable element inside `panel`.
///
/// Returns `true` when focus moved and the key event should not reach the
/// browser's default Tab handling.
#[cfg(feature = "hydrate")]
pub fn cycle_focus(panel: &web_sys::HtmlElement, backwards: bool) -> bool {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return false;
    };
    let elements: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        elements
            .iter()
            .position(|el| AsRef::<web_sys::Element>::as_ref(el) == &active)
    });
    let Some(next) = next_focus_index(current, elements.len(), backwards) else {
        return false;
    };
    elements[next].focus().is_ok()
}
