//! Edge-anchored overlay panel (drawer) with backdrop.
//!
//! ARCHITECTURE
//! ============
//! The caller owns `open`; the panel owns visibility. A `Presence` machine
//! lags visibility behind `open` by the exit delay so the closing animation
//! can play before the node is removed, and a reopen during that window
//! cancels the pending hide.
//!
//! Document-wide resources (Escape dispatch, body scroll lock, focus) are
//! held as RAII guards in one `OverlayResources` slot. Closing drops the
//! guards that only apply while open; unmounting drops all of them.
//!
//! The Effects in `overlay_view` only read `open` and forward it to a
//! `PanelDriver`, which owns all of the above.

#[cfg(test)]
#[path = "overlay_panel_test.rs"]
mod overlay_panel_test;

use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;

use crate::config::PanelConfig;
use crate::state::presence::{HideTicket, PanelState, Presence, PresenceCommand};
use crate::util::body_scroll::{self, ScrollLockGuard};
use crate::util::dom_ids;
use crate::util::escape_keys::{self, EscapeRegistration};
#[cfg(feature = "hydrate")]
use crate::util::focus;
use crate::util::focus::FocusReturn;
use crate::util::hide_timer::HideTimer;
use crate::util::motion::{ReducedMotion, prefers_reduced_motion};

/// Where a pointer press landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the panel.
    Backdrop,
    /// Anywhere inside the panel body.
    Panel,
}

/// Whether a press on `target` should close the panel.
pub fn dismisses_on_pointer(config: &PanelConfig, target: PointerTarget) -> bool {
    target == PointerTarget::Backdrop && config.close_on_click_outside
}

/// Whether `key` should close the panel.
pub fn dismisses_on_key(config: &PanelConfig, is_open: bool, key: &str) -> bool {
    is_open && config.close_on_escape && key == escape_keys::ESCAPE_KEY
}

/// Class list for the root wrapper, which drives the enter/exit animation.
pub fn root_class(state: PanelState) -> &'static str {
    match (state.is_open, state.is_visible) {
        (true, _) => "overlay-panel-root overlay-panel-root--open",
        (false, true) => "overlay-panel-root overlay-panel-root--closing",
        (false, false) => "overlay-panel-root",
    }
}

/// Guards a panel holds on shared document resources.
#[derive(Default)]
struct OverlayResources {
    timer: HideTimer,
    escape: Option<EscapeRegistration>,
    scroll: Option<ScrollLockGuard>,
    focus_return: Option<FocusReturn>,
}

impl OverlayResources {
    /// Arm or disarm the open-only guards.
    fn sync_open(&mut self, is_open: bool, config: &PanelConfig, on_close: Callback<()>) {
        // Re-registering replaces the previous handler, never stacks a second one.
        self.escape = dismisses_on_key(config, is_open, escape_keys::ESCAPE_KEY)
            .then(|| escape_keys::register(move || on_close.run(())));

        let wants_lock = is_open && config.prevent_scroll;
        if wants_lock && self.scroll.is_none() {
            self.scroll = Some(body_scroll::acquire());
        } else if !wants_lock {
            self.scroll = None;
        }

        if is_open {
            if self.focus_return.is_none() {
                self.focus_return = Some(FocusReturn::capture());
            }
        } else if let Some(focus_return) = self.focus_return.take() {
            focus_return.restore();
        }
    }

    fn release(&mut self) {
        self.timer.cancel();
        self.escape = None;
        self.scroll = None;
        self.focus_return = None;
    }
}

/// Reactive half of one mounted panel: presence, published state and the
/// guards. `overlay_view` feeds it from Effects; it is `Copy` so timer
/// callbacks can hold it.
#[derive(Clone, Copy)]
pub(crate) struct PanelDriver {
    presence: StoredValue<Presence>,
    state: RwSignal<PanelState>,
    resources: StoredValue<OverlayResources, LocalStorage>,
}

impl PanelDriver {
    /// Create the driver under the current owner. Disposing that owner
    /// releases every guard the driver still holds.
    pub(crate) fn new(open: bool, exit_ms: u32) -> Self {
        let presence = Presence::new(open, exit_ms);
        let driver = Self {
            state: RwSignal::new(presence.state()),
            presence: StoredValue::new(presence),
            resources: StoredValue::new_local(OverlayResources::default()),
        };
        on_cleanup(move || {
            driver.resources.try_update_value(OverlayResources::release);
        });
        driver
    }

    pub(crate) fn state(&self) -> RwSignal<PanelState> {
        self.state
    }

    /// Move visibility toward `is_open`, lagging on close.
    pub(crate) fn sync_presence(self, is_open: bool) {
        let command = self.presence.try_update_value(|p| p.sync(is_open)).unwrap_or(PresenceCommand::Idle);
        match command {
            PresenceCommand::Idle => return,
            PresenceCommand::Show => {
                self.resources.update_value(|r| r.timer.cancel());
            }
            PresenceCommand::HideNow => {}
            PresenceCommand::ScheduleHide { ticket, delay_ms } => {
                self.resources.update_value(|r| r.timer.schedule(delay_ms, move || self.hide_elapsed(ticket)));
            }
        }
        self.state.set(self.presence.with_value(Presence::state));
    }

    /// Exit delay for later closes; a hide already scheduled keeps its delay.
    pub(crate) fn set_exit_ms(self, exit_ms: u32) {
        self.presence.update_value(|p| p.set_exit_ms(exit_ms));
    }

    /// Arm or disarm Escape, scroll lock and focus return.
    pub(crate) fn sync_resources(self, is_open: bool, config: &PanelConfig, on_close: Callback<()>) {
        self.resources.update_value(|r| r.sync_open(is_open, config, on_close));
    }

    // A ticket from before a reopen is stale and leaves the panel alone.
    fn hide_elapsed(self, ticket: HideTicket) {
        let hidden = self.presence.try_update_value(|p| p.hide_elapsed(ticket).then(|| p.state())).flatten();
        if let Some(next) = hidden {
            let _ = self.state.try_set(next);
        }
    }
}

/// Slide-in panel anchored to a viewport edge.
///
/// `open` is owned by the caller; `on_close` is invoked for backdrop clicks,
/// Escape and the close button, and may be called more than once.
#[component]
pub fn OverlayPanel(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] config: PanelConfig,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    overlay_view(open, on_close, config, title, footer, children)
}

/// Shared body of `OverlayPanel` and `PanelContent`.
pub(crate) fn overlay_view(
    open: Signal<bool>,
    on_close: Callback<()>,
    config: PanelConfig,
    title: MaybeProp<String>,
    footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let reduced_motion = use_context::<ReducedMotion>();
    let exit_ms = {
        let config = config.clone();
        Signal::derive(move || {
            let reduced = reduced_motion.map_or_else(prefers_reduced_motion, |motion| motion.0.get());
            config.effective_animation_ms(reduced)
        })
    };
    let driver = PanelDriver::new(open.get_untracked(), exit_ms.get_untracked());
    let state = driver.state();
    let panel_ref = NodeRef::<html::Div>::new();

    Effect::new(move || driver.set_exit_ms(exit_ms.get()));
    Effect::new(move || driver.sync_presence(open.get()));

    {
        let config = config.clone();
        Effect::new(move || driver.sync_resources(open.get(), &config, on_close));
    }

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(panel) = panel_ref.get() {
                if open.get() {
                    focus::focus_panel(&panel);
                }
            }
        });
    }

    let backdrop_dismisses = dismisses_on_pointer(&config, PointerTarget::Backdrop);
    let on_backdrop = move |_| {
        if backdrop_dismisses {
            on_close.run(());
        }
    };
    let on_panel_keydown = move |ev: KeyboardEvent| {
        #[cfg(feature = "hydrate")]
        {
            if ev.key() == "Tab" {
                if let Some(panel) = panel_ref.get_untracked() {
                    if focus::cycle_focus(&panel, ev.shift_key()) {
                        ev.prevent_default();
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let panel_id = dom_ids::next_panel_id();
    let title_id = dom_ids::title_id(&panel_id);
    let panel_class = config.panel_class();
    let show_close_button = config.show_close_button;
    let root_style = move || format!("--overlay-panel-duration: {}ms;", exit_ms.get());

    view! {
        <Show when=move || state.get().is_visible>
            <div class=move || root_class(state.get()) style=root_style>
                <div class="overlay-panel__backdrop" aria-hidden="true" on:click=on_backdrop></div>
                <div
                    node_ref=panel_ref
                    id=panel_id.clone()
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-hidden=move || (!state.get().is_open).to_string()
                    aria-labelledby={
                        let title_id = title_id.clone();
                        move || title.get().map(|_| title_id.clone())
                    }
                    tabindex="-1"
                    on:keydown=on_panel_keydown
                >
                    <div class="overlay-panel__header">
                        {
                            let title_id = title_id.clone();
                            move || {
                                title
                                    .get()
                                    .map(|text| {
                                        view! {
                                            <h2 id=title_id.clone() class="overlay-panel__title">
                                                {text}
                                            </h2>
                                        }
                                    })
                            }
                        }
                        {show_close_button
                            .then(|| {
                                view! {
                                    <button
                                        type="button"
                                        class="overlay-panel__close"
                                        aria-label="Close panel"
                                        on:click=move |_| on_close.run(())
                                    >
                                        "✕"
                                    </button>
                                }
                            })}
                    </div>
                    <div class="overlay-panel__body">{children()}</div>
                    {footer
                        .clone()
                        .map(|footer| view! { <div class="overlay-panel__footer">{footer.run()}</div> })}
                </div>
            </div>
        </Show>
    }
}
