//! Holder accounting for the document scroll lock.
//!
//! Several panels may be open at once and all of them want `<body>` to stop
//! scrolling. This registry decides when the document flips between locked
//! and unlocked; `util::body_scroll` applies the flips to the DOM.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use crate::config::ScrollLockPolicy;

/// DOM change required after an acquire or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Lock,
    Unlock,
    Unchanged,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollLockRegistry {
    policy: ScrollLockPolicy,
    holders: usize,
    locked: bool,
}

impl ScrollLockRegistry {
    pub fn new(policy: ScrollLockPolicy) -> Self {
        Self { policy, holders: 0, locked: false }
    }

    pub fn policy(&self) -> ScrollLockPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ScrollLockPolicy) {
        self.policy = policy;
    }

    pub fn holders(&self) -> usize {
        self.holders
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn acquire(&mut self) -> LockChange {
        self.holders += 1;
        if self.locked {
            LockChange::Unchanged
        } else {
            self.locked = true;
            LockChange::Lock
        }
    }

    pub fn release(&mut self) -> LockChange {
        self.holders = self.holders.saturating_sub(1);
        let keep = match self.policy {
            ScrollLockPolicy::LastRelease => false,
            ScrollLockPolicy::Counted => self.holders > 0,
        };
        if self.locked && !keep {
            self.locked = false;
            LockChange::Unlock
        } else {
            LockChange::Unchanged
        }
    }
}
