//! Whether the pointer is over a view linked to the label strips.
//!
//! Leaving is delayed: moving between two linked panes passes over a gap,
//! and switching the strips to the zoom hint for that instant would flash.

use std::time::{Duration, Instant};
use tracing::debug;

/// Delay between the pointer leaving a linked view and the strips noticing.
pub const LINGER: Duration = Duration::from_millis(250);

/// Pointer presence with a linger on leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedViewPresence {
    over: bool,
    leave_deadline: Option<Instant>,
    linger: Duration,
}

impl Default for LinkedViewPresence {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedViewPresence {
    /// Pointer not over any linked view.
    pub fn new() -> Self {
        Self::with_linger(LINGER)
    }

    /// Presence with a custom linger.
    pub fn with_linger(linger: Duration) -> Self {
        Self {
            over: false,
            leave_deadline: None,
            linger,
        }
    }

    /// Pointer entered a linked view. Cancels a pending leave.
    pub fn enter(&mut self) {
        self.over = true;
        self.leave_deadline = None;
    }

    /// Pointer left the linked views at `now`. Takes effect after the linger.
    pub fn leave(&mut self, now: Instant) {
        if self.over && self.leave_deadline.is_none() {
            self.leave_deadline = Some(now + self.linger);
        }
    }

    /// Apply a due leave. Returns true when presence changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.leave_deadline {
            Some(deadline) if now >= deadline => {
                debug!("Pointer left linked views");
                self.over = false;
                self.leave_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether the pointer counts as over a linked view.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// When a pending leave takes effect.
    pub fn deadline(&self) -> Option<Instant> {
        self.leave_deadline
    }
}
