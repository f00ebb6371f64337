//! Context-bound pieces of a panel: provider, triggers and content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap a region in `PanelProvider`, drop any number of `PanelTrigger`
//! buttons into it, and render the body through `PanelContent`. None of them
//! thread an `open` flag through props; they all share the provider's
//! `PanelContext`.
//!
//! A component body runs under its parent's owner, so the provider renders
//! its children through `Provider`, which gives them a child owner. Without
//! it two sibling providers would write the same context slot and content
//! built later (inside `Show`) would bind to the wrong panel.

#[cfg(test)]
#[path = "panel_trigger_test.rs"]
mod panel_trigger_test;

use leptos::context::Provider;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::overlay_panel::overlay_view;
use crate::config::PanelConfig;
use crate::state::panel_context::{PanelContext, compose_handlers, use_panel_context};

/// Join a base class with an optional caller-supplied one.
pub fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_owned(),
    }
}

/// Click handler for a trigger: the caller's `on_click` first, then open.
pub fn open_handler<E: Clone + 'static>(ctx: PanelContext, on_click: Option<Callback<E>>) -> impl Fn(E) {
    compose_handlers(on_click.map(|cb| move |ev: E| cb.run(ev)), move |_: E| ctx.open())
}

/// Click handler for a close button: the caller's `on_click` first, then close.
pub fn close_handler<E: Clone + 'static>(ctx: PanelContext, on_click: Option<Callback<E>>) -> impl Fn(E) {
    compose_handlers(on_click.map(|cb| move |ev: E| cb.run(ev)), move |_: E| ctx.close())
}

/// Scope that owns one panel's open state.
#[component]
pub fn PanelProvider(#[prop(optional)] default_open: bool, children: Children) -> impl IntoView {
    let ctx = PanelContext::new(default_open);
    view! { <Provider value=ctx>{children()}</Provider> }
}

/// Button that opens the surrounding panel.
///
/// A caller `on_click` still runs, before the panel opens.
#[component]
pub fn PanelTrigger(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_panel_context("PanelTrigger");
    let handler = open_handler(ctx, on_click);

    view! {
        <button
            type="button"
            class=merge_class("panel-trigger", class.as_deref())
            aria-haspopup="dialog"
            aria-expanded=move || ctx.is_open().to_string()
            on:click=handler
        >
            {children()}
        </button>
    }
}

/// Button inside panel content that closes the surrounding panel.
#[component]
pub fn PanelClose(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_panel_context("PanelClose");
    let handler = close_handler(ctx, on_click);

    view! {
        <button type="button" class=merge_class("panel-close", class.as_deref()) on:click=handler>
            {children()}
        </button>
    }
}

/// Overlay panel bound to the surrounding provider.
#[component]
pub fn PanelContent(
    #[prop(optional)] config: PanelConfig,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_panel_context("PanelContent");
    let on_close = Callback::new(move |()| ctx.close());
    overlay_view(ctx.signal(), on_close, config, title, footer, children)
}
