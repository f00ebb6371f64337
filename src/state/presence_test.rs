use super::*;

fn schedule_ticket(command: PresenceCommand) -> HideTicket {
    match command {
        PresenceCommand::ScheduleHide { ticket, .. } => ticket,
        other => panic!("expected ScheduleHide, got {other:?}"),
    }
}

// =============================================================
// Basic transitions
// =============================================================

#[test]
fn new_closed_renders_nothing() {
    let presence = Presence::new(false, 300);
    assert_eq!(presence.phase(), PanelPhase::Closed);
    assert_eq!(presence.state(), PanelState { is_open: false, is_visible: false });
}

#[test]
fn new_open_starts_visible() {
    let presence = Presence::new(true, 300);
    assert_eq!(presence.state(), PanelState { is_open: true, is_visible: true });
}

#[test]
fn open_from_closed_shows() {
    let mut presence = Presence::new(false, 300);
    assert_eq!(presence.sync(true), PresenceCommand::Show);
    assert!(presence.is_open());
    assert!(presence.is_visible());
}

#[test]
fn close_keeps_panel_visible_until_timer_fires() {
    let mut presence = Presence::new(true, 300);
    let command = presence.sync(false);
    let PresenceCommand::ScheduleHide { ticket, delay_ms } = command else {
        panic!("expected ScheduleHide, got {command:?}");
    };
    assert_eq!(delay_ms, 300);
    assert!(presence.is_closing());
    assert_eq!(presence.state(), PanelState { is_open: false, is_visible: true });

    assert!(presence.hide_elapsed(ticket));
    assert_eq!(presence.phase(), PanelPhase::Closed);
}

#[test]
fn zero_delay_hides_immediately() {
    let mut presence = Presence::new(true, 0);
    assert_eq!(presence.sync(false), PresenceCommand::HideNow);
    assert_eq!(presence.phase(), PanelPhase::Closed);
}

#[test]
fn exit_delay_change_applies_to_next_close() {
    let mut presence = Presence::new(true, 300);
    presence.set_exit_ms(0);
    assert_eq!(presence.exit_ms(), 0);
    assert_eq!(presence.sync(false), PresenceCommand::HideNow);
}

#[test]
fn closed_never_moves_to_closing() {
    let mut presence = Presence::new(false, 300);
    assert_eq!(presence.sync(false), PresenceCommand::Idle);
    assert_eq!(presence.phase(), PanelPhase::Closed);
}

// =============================================================
// Reopen and stale timers
// =============================================================

#[test]
fn reopen_before_timer_cancels_hide() {
    let mut presence = Presence::new(true, 300);
    let ticket = schedule_ticket(presence.sync(false));

    assert_eq!(presence.sync(true), PresenceCommand::Show);
    assert_eq!(presence.pending_ticket(), None);

    // The stale timer fires anyway: nothing is hidden.
    assert!(!presence.hide_elapsed(ticket));
    assert_eq!(presence.state(), PanelState { is_open: true, is_visible: true });
}

#[test]
fn stale_ticket_from_earlier_close_does_not_cut_second_animation() {
    let mut presence = Presence::new(true, 300);
    let first = schedule_ticket(presence.sync(false));
    presence.sync(true);
    let second = schedule_ticket(presence.sync(false));
    assert_ne!(first, second);

    assert!(!presence.hide_elapsed(first));
    assert!(presence.is_visible());
    assert!(presence.hide_elapsed(second));
    assert!(!presence.is_visible());
}

#[test]
fn ticket_fired_twice_only_hides_once() {
    let mut presence = Presence::new(true, 300);
    let ticket = schedule_ticket(presence.sync(false));
    assert!(presence.hide_elapsed(ticket));
    assert!(!presence.hide_elapsed(ticket));
}

// =============================================================
// Idempotency
// =============================================================

#[test]
fn double_close_schedules_single_hide() {
    let mut presence = Presence::new(true, 300);
    let ticket = schedule_ticket(presence.sync(false));
    assert_eq!(presence.sync(false), PresenceCommand::Idle);
    assert_eq!(presence.pending_ticket(), Some(ticket));
}

#[test]
fn double_open_is_idle() {
    let mut presence = Presence::new(false, 300);
    presence.sync(true);
    assert_eq!(presence.sync(true), PresenceCommand::Idle);
}

// =============================================================
// Exhaustive sequences
// =============================================================

#[derive(Clone, Copy, Debug)]
enum Op {
    Open,
    Close,
    /// Fire the oldest timer that was ever scheduled and has not fired yet,
    /// including timers whose close was superseded by a reopen.
    FireOldest,
}

const OPS: [Op; 3] = [Op::Open, Op::Close, Op::FireOldest];

fn run(sequence: &[Op]) {
    let mut presence = Presence::new(false, 300);
    let mut timers: Vec<HideTicket> = Vec::new();
    for (step, op) in sequence.iter().enumerate() {
        let was_open = presence.is_open();
        match op {
            Op::Open => {
                presence.sync(true);
            }
            Op::Close => {
                if let PresenceCommand::ScheduleHide { ticket, .. } = presence.sync(false) {
                    timers.push(ticket);
                }
            }
            Op::FireOldest => {
                if !timers.is_empty() {
                    let ticket = timers.remove(0);
                    presence.hide_elapsed(ticket);
                }
            }
        }
        let state = presence.state();
        assert!(state.is_consistent(), "open without visible after {:?}", &sequence[..=step]);
        if was_open && presence.is_open() {
            assert!(state.is_visible, "flicker after {:?}", &sequence[..=step]);
        }
        assert!(
            timers.iter().filter(|t| presence.pending_ticket() == Some(**t)).count() <= 1,
            "more than one live hide after {:?}",
            &sequence[..=step]
        );
    }
}

fn enumerate(prefix: &mut Vec<Op>, depth: usize) {
    run(prefix);
    if depth == 0 {
        return;
    }
    for op in OPS {
        prefix.push(op);
        enumerate(prefix, depth - 1);
        prefix.pop();
    }
}

#[test]
fn invariants_hold_for_all_short_sequences() {
    enumerate(&mut Vec::new(), 7);
}
