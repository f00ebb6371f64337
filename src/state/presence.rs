//! Open/visible state machine for overlay panels.
//!
//! DESIGN
//! ======
//! `is_open` is what the caller asked for; `is_visible` lags it on close so
//! the exit animation can finish before the node is removed. Each close is
//! stamped with a `HideTicket`, and a hide only lands when its ticket still
//! matches the current `Closing` phase. A timer that fires after a reopen
//! therefore has nothing to hide, even if cancelling it raced.
//!
//! The machine does no I/O. The component turns `PresenceCommand`s into
//! timer calls.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

/// Identifier of one scheduled hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HideTicket(u64);

/// Phase of a panel's lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Closed,
    Open,
    /// Closed logically, still on screen while the exit animation runs.
    Closing { ticket: HideTicket },
}

/// Snapshot of the two booleans a renderer cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub is_open: bool,
    pub is_visible: bool,
}

impl PanelState {
    /// `is_open` implies `is_visible`.
    pub fn is_consistent(self) -> bool {
        !self.is_open || self.is_visible
    }
}

/// Side effect the host must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceCommand {
    /// Nothing changed.
    Idle,
    /// Panel became open; cancel any pending hide timer.
    Show,
    /// Start a timer and call [`Presence::hide_elapsed`] with `ticket` when it fires.
    ScheduleHide { ticket: HideTicket, delay_ms: u32 },
    /// Panel closed with no exit animation; it is already hidden.
    HideNow,
}

/// Presence state machine for one panel instance.
#[derive(Clone, Debug)]
pub struct Presence {
    phase: PanelPhase,
    exit_ms: u32,
    next_ticket: u64,
}

impl Presence {
    pub fn new(open: bool, exit_ms: u32) -> Self {
        Self {
            phase: if open { PanelPhase::Open } else { PanelPhase::Closed },
            exit_ms,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn exit_ms(&self) -> u32 {
        self.exit_ms
    }

    /// Change the exit delay used by later closes. A hide already scheduled
    /// keeps its original delay.
    pub fn set_exit_ms(&mut self, exit_ms: u32) {
        self.exit_ms = exit_ms;
    }

    pub fn is_open(&self) -> bool {
        self.phase == PanelPhase::Open
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, PanelPhase::Closing { .. })
    }

    pub fn state(&self) -> PanelState {
        PanelState { is_open: self.is_open(), is_visible: self.is_visible() }
    }

    /// Ticket of the hide currently pending, if any.
    pub fn pending_ticket(&self) -> Option<HideTicket> {
        match self.phase {
            PanelPhase::Closing { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Align the machine with the caller's requested open state.
    ///
    /// Repeating the current request is a no-op, so a double close schedules
    /// a single hide.
    pub fn sync(&mut self, open: bool) -> PresenceCommand {
        let command = match (self.phase, open) {
            (PanelPhase::Open, true) | (PanelPhase::Closed | PanelPhase::Closing { .. }, false) => {
                PresenceCommand::Idle
            }
            (PanelPhase::Closed | PanelPhase::Closing { .. }, true) => {
                self.phase = PanelPhase::Open;
                PresenceCommand::Show
            }
            (PanelPhase::Open, false) if self.exit_ms == 0 => {
                self.phase = PanelPhase::Closed;
                PresenceCommand::HideNow
            }
            (PanelPhase::Open, false) => {
                let ticket = HideTicket(self.next_ticket);
                self.next_ticket += 1;
                self.phase = PanelPhase::Closing { ticket };
                PresenceCommand::ScheduleHide { ticket, delay_ms: self.exit_ms }
            }
        };
        if command != PresenceCommand::Idle {
            log::debug!("overlay panel presence -> {:?}", self.phase);
        }
        command
    }

    /// Apply a fired hide timer. Returns `true` when the panel became hidden.
    pub fn hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.pending_ticket() == Some(ticket) {
            self.phase = PanelPhase::Closed;
            log::debug!("overlay panel presence -> Closed");
            true
        } else {
            false
        }
    }
}
