//! Debounced search scheduling.
//!
//! Each keystroke issues a fresh ticket and invalidates every earlier one.
//! The platform layer sleeps out the quiet period, re-checks its ticket
//! before firing the request, and checks once more before applying the
//! response, so a stale reply can never overwrite a newer one.
use std::cell::Cell;

/// Quiet period after the last keystroke before a search actually runs.
pub const DEBOUNCE_MS: u32 = 300;

/// Proof of being the most recent scheduled search at some point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Monotonic ticket source; the latest issued ticket is the only live one.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: Cell<u64>,
}

impl SearchSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh ticket, invalidating all previously issued ones.
    pub fn issue(&self) -> SearchTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        SearchTicket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Invalidate everything outstanding, e.g. when the input is cleared.
    pub fn cancel_all(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}
