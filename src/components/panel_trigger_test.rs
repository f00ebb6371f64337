use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use crate::state::panel_context::try_use_panel_context;

type Recorded = Arc<Mutex<Vec<Owner>>>;

// Renders nothing; remembers the owner it was built under so a test can
// resolve context the way lazily built content would.
fn record(into: &Recorded) -> impl IntoView + use<> {
    if let Some(owner) = Owner::current() {
        into.lock().unwrap().push(owner);
    }
}

fn recorded_context(recorded: &Recorded, component: &'static str) -> PanelContext {
    let owner = recorded.lock().unwrap().first().cloned().unwrap();
    owner.with(|| use_panel_context(component))
}

fn counting_click() -> (Arc<AtomicUsize>, Callback<()>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let callback = Callback::new(move |()| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (count, callback)
}

// =============================================================
// Class merging
// =============================================================

#[test]
fn merge_class_appends_extra() {
    assert_eq!(merge_class("panel-trigger", Some("btn btn--primary")), "panel-trigger btn btn--primary");
}

#[test]
fn merge_class_ignores_missing_or_blank_extra() {
    assert_eq!(merge_class("panel-trigger", None), "panel-trigger");
    assert_eq!(merge_class("panel-close", Some("  ")), "panel-close");
}

// =============================================================
// Provider scoping
// =============================================================

#[test]
fn sibling_providers_keep_separate_state() {
    let owner = Owner::new();
    owner.with(|| {
        let filters: Recorded = Arc::default();
        let notices: Recorded = Arc::default();
        let in_filters = Arc::clone(&filters);
        let in_notices = Arc::clone(&notices);

        let _view = view! {
            <div>
                <PanelProvider>
                    <PanelTrigger>"Filters"</PanelTrigger>
                    {record(&in_filters)}
                </PanelProvider>
                <PanelProvider>
                    <PanelTrigger>"Notifications"</PanelTrigger>
                    {record(&in_notices)}
                </PanelProvider>
            </div>
        };

        // Content inside a panel resolves its context after both providers ran.
        let filters_close = recorded_context(&filters, "PanelClose");
        let notices_close = recorded_context(&notices, "PanelClose");

        filters_close.open();
        assert!(filters_close.is_open_untracked());
        assert!(!notices_close.is_open_untracked());

        notices_close.open();
        filters_close.close();
        assert!(!filters_close.is_open_untracked());
        assert!(notices_close.is_open_untracked());
    });
}

#[test]
fn provider_does_not_leak_context_to_siblings() {
    let owner = Owner::new();
    owner.with(|| {
        let _view = view! {
            <div>
                <PanelProvider>
                    <PanelTrigger>"Filters"</PanelTrigger>
                </PanelProvider>
            </div>
        };
        assert!(try_use_panel_context("PanelTrigger").is_err());
    });
}

#[test]
fn default_open_provider_starts_open() {
    let owner = Owner::new();
    owner.with(|| {
        let recorded: Recorded = Arc::default();
        let inside = Arc::clone(&recorded);
        let _view = view! {
            <PanelProvider default_open=true>
                {record(&inside)}
            </PanelProvider>
        };
        assert!(recorded_context(&recorded, "PanelContent").is_open_untracked());
    });
}

#[test]
fn trigger_and_content_mount_inside_provider() {
    let owner = Owner::new();
    owner.with(|| {
        let recorded: Recorded = Arc::default();
        let inside = Arc::clone(&recorded);
        let _view = view! {
            <PanelProvider>
                <PanelTrigger class="btn">"Filters"</PanelTrigger>
                <PanelTrigger class="btn btn--link">"Refine search"</PanelTrigger>
                <PanelContent title="Filters">
                    <PanelClose>"Show results"</PanelClose>
                </PanelContent>
                {record(&inside)}
            </PanelProvider>
        };
        assert!(!recorded_context(&recorded, "PanelContent").is_open_untracked());
    });
}

#[test]
#[should_panic(expected = "PanelTrigger must be used inside a PanelProvider")]
fn trigger_outside_provider_fails_fast() {
    let owner = Owner::new();
    owner.with(|| {
        let _view = view! { <PanelTrigger>"Filters"</PanelTrigger> };
    });
}

// =============================================================
// Trigger and close handlers
// =============================================================

#[test]
fn two_triggers_on_one_provider_share_state() {
    let owner = Owner::new();
    owner.with(|| {
        let recorded: Recorded = Arc::default();
        let inside = Arc::clone(&recorded);
        let _view = view! {
            <PanelProvider>
                {record(&inside)}
            </PanelProvider>
        };
        let header = open_handler::<()>(recorded_context(&recorded, "PanelTrigger"), None);
        let content = recorded_context(&recorded, "PanelContent");
        let results = close_handler::<()>(recorded_context(&recorded, "PanelClose"), None);

        header(());
        assert!(content.is_open_untracked());

        results(());
        assert!(!content.is_open_untracked());

        let refine = open_handler::<()>(recorded_context(&recorded, "PanelTrigger"), None);
        refine(());
        assert!(content.is_open_untracked());
    });
}

#[test]
fn trigger_with_caller_click_runs_both_once() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PanelContext::new(false);
        let (clicks, on_click) = counting_click();
        let handler = open_handler(ctx, Some(on_click));

        handler(());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert!(ctx.is_open_untracked());
    });
}

#[test]
fn close_with_caller_click_runs_both_once() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PanelContext::new(true);
        let (clicks, on_click) = counting_click();
        let handler = close_handler(ctx, Some(on_click));

        handler(());
        handler(());
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
        assert!(!ctx.is_open_untracked());
    });
}
