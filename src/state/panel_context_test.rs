use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn in_owner<T>(fun: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(fun)
}

// =============================================================
// open / close / toggle
// =============================================================

#[test]
fn context_starts_with_default_open() {
    in_owner(|| {
        assert!(!PanelContext::new(false).is_open_untracked());
        assert!(PanelContext::new(true).is_open_untracked());
    });
}

#[test]
fn open_close_toggle_update_shared_state() {
    in_owner(|| {
        let ctx = PanelContext::new(false);
        ctx.open();
        assert!(ctx.is_open_untracked());
        ctx.close();
        assert!(!ctx.is_open_untracked());
        ctx.toggle();
        assert!(ctx.is_open_untracked());
        ctx.toggle();
        assert!(!ctx.is_open_untracked());
    });
}

#[test]
fn repeated_close_is_idempotent() {
    in_owner(|| {
        let ctx = PanelContext::new(true);
        ctx.close();
        ctx.close();
        assert!(!ctx.is_open_untracked());
        assert!(!ctx.signal().get_untracked());
    });
}

// =============================================================
// Provider lookup
// =============================================================

#[test]
fn handles_from_one_provider_share_one_state() {
    in_owner(|| {
        let provided = PanelContext::new(false);
        provide_context(provided);
        let first_trigger = use_panel_context("PanelTrigger");
        let second_trigger = use_panel_context("PanelTrigger");
        let content = use_panel_context("PanelContent");

        second_trigger.open();
        assert!(first_trigger.is_open_untracked());
        assert!(content.is_open_untracked());
        assert!(provided.is_open_untracked());

        first_trigger.open();
        assert!(content.is_open_untracked());
    });
}

#[test]
fn nested_provider_shadows_outer() {
    in_owner(|| {
        let outer = PanelContext::new(false);
        provide_context(outer);
        let inner_owner = Owner::new();
        let inner = inner_owner.with(|| {
            provide_context(PanelContext::new(false));
            use_panel_context("PanelTrigger")
        });
        inner.open();
        assert!(!outer.is_open_untracked());
    });
}

#[test]
fn try_use_outside_provider_reports_component() {
    in_owner(|| {
        let err = try_use_panel_context("PanelContent").unwrap_err();
        assert!(matches!(err, PanelError::OutsideProvider { component: "PanelContent" }));
    });
}

#[test]
#[should_panic(expected = "PanelTrigger must be used inside a PanelProvider")]
fn use_outside_provider_fails_fast() {
    in_owner(|| {
        let _ = use_panel_context("PanelTrigger");
    });
}

// =============================================================
// Handler composition
// =============================================================

#[test]
fn composed_handler_runs_original_and_open_once_each() {
    in_owner(|| {
        let ctx = PanelContext::new(false);
        let original_calls = Rc::new(Cell::new(0_u32));
        let open_calls = Rc::new(Cell::new(0_u32));

        let counted = Rc::clone(&original_calls);
        let opened = Rc::clone(&open_calls);
        let handler = compose_handlers(Some(move |_: u8| counted.set(counted.get() + 1)), move |_: u8| {
            opened.set(opened.get() + 1);
            ctx.open();
        });

        handler(1);
        assert_eq!(original_calls.get(), 1);
        assert_eq!(open_calls.get(), 1);
        assert!(ctx.is_open_untracked());

        handler(2);
        assert_eq!(original_calls.get(), 2);
        assert_eq!(open_calls.get(), 2);
    });
}

#[test]
fn composed_handler_runs_original_first() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    let handler = compose_handlers(Some(move |ev: &'static str| first.borrow_mut().push(("original", ev))), move |ev| {
        second.borrow_mut().push(("then", ev));
    });
    handler("click");
    assert_eq!(*order.borrow(), vec![("original", "click"), ("then", "click")]);
}

#[test]
fn composed_handler_without_original_only_runs_then() {
    let calls = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&calls);
    let handler = compose_handlers(None::<fn(u8)>, move |_: u8| seen.set(seen.get() + 1));
    handler(0);
    assert_eq!(calls.get(), 1);
}
