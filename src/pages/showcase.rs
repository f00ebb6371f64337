//! Technician browsing page wiring the panel consumers together.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters, cart and notifications are the marketplace's everyday drawers.
//! Each supplies only content, footer and callbacks: filters use the
//! provider/trigger split with two triggers, the cart is a controlled
//! `OverlayPanel`, and notifications slide up from the bottom edge. The
//! header also flips the stored reduced-motion choice, which every mounted
//! panel follows.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::overlay_panel::OverlayPanel;
use crate::components::panel_trigger::{PanelClose, PanelContent, PanelProvider, PanelTrigger};
use crate::config::{Edge, PanelConfig, PanelSize};
use crate::util::motion::{ReducedMotion, toggle_reduced_motion};

/// A requested service in the cart, priced in cents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub service: String,
    pub base_cents: u64,
    pub modifier_cents: Vec<u64>,
}

impl CartLine {
    pub fn total_cents(&self) -> u64 {
        self.base_cents + self.modifier_cents.iter().sum::<u64>()
    }
}

pub fn cart_total_cents(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::total_cents).sum()
}

/// Format cents as dollars, e.g. `12345` -> `$123.45`.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn sample_cart() -> Vec<CartLine> {
    vec![
        CartLine { service: "Sink repair".to_owned(), base_cents: 8_500, modifier_cents: vec![2_000] },
        CartLine { service: "Outlet install".to_owned(), base_cents: 6_000, modifier_cents: vec![] },
    ]
}

/// Browse page with filter, cart and notification drawers.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    let ReducedMotion(reduced_motion) = expect_context::<ReducedMotion>();
    let cart_open = RwSignal::new(false);
    let cart = RwSignal::new(sample_cart());
    let close_cart = Callback::new(move |()| cart_open.set(false));
    let track_filters_open = Callback::new(move |_: MouseEvent| log::debug!("filters opened from header"));

    let filter_config = PanelConfig::default().with_edge(Edge::Start).with_size(PanelSize::Sm);
    let cart_config = PanelConfig::default().with_size(PanelSize::Md).with_class("cart-panel");
    let notice_config = PanelConfig::default()
        .with_edge(Edge::Bottom)
        .with_size(PanelSize::Sm)
        .with_close_on_click_outside(false)
        .with_prevent_scroll(false);

    let cart_footer = move || {
        view! {
            <div class="cart-panel__summary">
                <span>"Total"</span>
                <strong>{move || format_price(cart_total_cents(&cart.get()))}</strong>
            </div>
            <button type="button" class="btn btn--primary" on:click=move |_| cart_open.set(false)>
                "Request service"
            </button>
        }
    };

    view! {
        <div class="showcase">
            <PanelProvider>
                <header class="showcase__header">
                    <h1>"Find a technician"</h1>
                    <PanelTrigger class="btn" on_click=track_filters_open>
                        "Filters"
                    </PanelTrigger>
                    <button type="button" class="btn" on:click=move |_| cart_open.set(true)>
                        {move || format!("Cart ({})", cart.get().len())}
                    </button>
                    <button
                        type="button"
                        class="btn showcase__motion-toggle"
                        aria-pressed=move || reduced_motion.get().to_string()
                        on:click=move |_| {
                            let next = toggle_reduced_motion(reduced_motion.get_untracked());
                            reduced_motion.set(next);
                        }
                        title="Toggle panel animations"
                    >
                        "Reduce motion"
                    </button>
                </header>

                <section class="showcase__results">
                    <p>"No technicians match your search yet."</p>
                    <PanelTrigger class="btn btn--link">"Refine search"</PanelTrigger>
                </section>

                <PanelContent config=filter_config title="Filters">
                    <label class="filter-row">
                        <input type="checkbox"/>
                        " Available today"
                    </label>
                    <label class="filter-row">
                        <input type="checkbox"/>
                        " Licensed and insured"
                    </label>
                    <PanelClose class="btn btn--primary">"Show results"</PanelClose>
                </PanelContent>
            </PanelProvider>

            <OverlayPanel open=cart_open on_close=close_cart config=cart_config title="Your cart" footer=cart_footer>
                <ul class="cart-panel__lines">
                    <For each=move || cart.get() key=|line| line.service.clone() let:line>
                        <li class="cart-panel__line">
                            <span>{line.service.clone()}</span>
                            <span>{format_price(line.total_cents())}</span>
                        </li>
                    </For>
                </ul>
            </OverlayPanel>

            <PanelProvider>
                <PanelTrigger class="showcase__notice-toggle">"Notifications"</PanelTrigger>
                <PanelContent config=notice_config title="Notifications">
                    <p>"Your plumber confirmed tomorrow at 9:00."</p>
                </PanelContent>
            </PanelProvider>
        </div>
    }
}
