//! Reduced-motion preference lookup.
//!
//! Reads an explicit choice from `localStorage` first and falls back to the
//! `prefers-reduced-motion` media query. Panels use the answer to collapse
//! their exit delay to zero. Requires a browser environment; SSR and native
//! tests always see "no preference".
//!
//! `App` provides the answer as a `ReducedMotion` signal so a toggle takes
//! effect on panels that are already mounted.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use leptos::prelude::*;

use crate::config::UiPreferences;

#[cfg(feature = "hydrate")]
const PREFS_KEY: &str = "homefix_ui_prefs";

/// Combine a stored override with the system setting.
pub fn resolve_reduced_motion(stored: Option<bool>, system: bool) -> bool {
    stored.unwrap_or(system)
}

/// Whether panels should skip their exit animation.
pub fn prefers_reduced_motion() -> bool {
    resolve_reduced_motion(load_preferences().reduce_motion, system_prefers_reduced_motion())
}

/// App-wide reduced-motion switch.
#[derive(Clone, Copy, Debug)]
pub struct ReducedMotion(pub RwSignal<bool>);

/// Seed the switch from the stored preference and provide it as context.
pub fn provide_reduced_motion() -> ReducedMotion {
    let motion = ReducedMotion(RwSignal::new(prefers_reduced_motion()));
    provide_context(motion);
    motion
}

/// Flip the stored reduced-motion choice and return the new value.
pub fn toggle_reduced_motion(current: bool) -> bool {
    let next = !current;
    let mut prefs = load_preferences();
    prefs.reduce_motion = Some(next);
    save_preferences(&prefs);
    next
}

/// Load stored UI preferences, or defaults when absent or unreadable.
pub fn load_preferences() -> UiPreferences {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return UiPreferences::default();
        };
        let Ok(Some(raw)) = storage.get_item(PREFS_KEY) else {
            return UiPreferences::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable ui preferences: {err}");
            UiPreferences::default()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UiPreferences::default()
    }
}

/// Persist UI preferences. Best effort; failures are logged and dropped.
pub fn save_preferences(prefs: &UiPreferences) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(prefs) else {
            return;
        };
        if storage.set_item(PREFS_KEY, &raw).is_err() {
            log::warn!("failed to persist ui preferences");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}

fn system_prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
