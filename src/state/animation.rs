//! Hover repaint ticker
//!
//! While the pointer is over a view linked to a strip, the strip repaints on
//! a fixed interval so hover changes driven by other views show up. The
//! ticker is pull-based: the event loop asks for [`HoverAnimation::next_deadline`],
//! sleeps until then, and calls [`HoverAnimation::poll`].

use std::time::{Duration, Instant};
use tracing::trace;

/// Interval between hover repaints.
pub const REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Ticker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// No ticks are scheduled.
    Idle,
    /// A tick is due at `next_tick`.
    Running {
        /// When the next tick fires.
        next_tick: Instant,
    },
}

/// Outcome of [`HoverAnimation::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running.
    Idle,
    /// Running, next tick not yet due.
    Pending,
    /// A tick fired; repaint.
    Repaint,
    /// A tick fired after the run flag dropped; the ticker stopped itself.
    Stopped,
}

/// Idle/Running repaint scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverAnimation {
    state: AnimationState,
    should_run: bool,
    interval: Duration,
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverAnimation {
    /// Idle ticker with the standard interval.
    pub fn new() -> Self {
        Self::with_interval(REPAINT_INTERVAL)
    }

    /// Idle ticker with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            state: AnimationState::Idle,
            should_run: false,
            interval,
        }
    }

    /// Current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether ticks are scheduled.
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// React to the pointer entering or leaving the linked views.
    pub fn update(&mut self, over_linked_view: bool, now: Instant) {
        self.should_run = over_linked_view;
        match (self.state, over_linked_view) {
            (AnimationState::Idle, true) => {
                trace!("Hover animation started");
                self.state = AnimationState::Running {
                    next_tick: now + self.interval,
                };
            }
            (AnimationState::Running { .. }, false) => {
                trace!("Hover animation stopped");
                self.state = AnimationState::Idle;
            }
            _ => {}
        }
    }

    /// Drop the run flag without stopping; the next tick stops the ticker.
    pub fn request_stop(&mut self) {
        self.should_run = false;
    }

    /// Advance the ticker to `now`.
    pub fn poll(&mut self, now: Instant) -> Tick {
        match self.state {
            AnimationState::Idle => Tick::Idle,
            AnimationState::Running { next_tick } if now < next_tick => Tick::Pending,
            AnimationState::Running { .. } => {
                if self.should_run {
                    self.state = AnimationState::Running {
                        next_tick: now + self.interval,
                    };
                    Tick::Repaint
                } else {
                    trace!("Hover animation tick after stop request");
                    self.state = AnimationState::Idle;
                    Tick::Stopped
                }
            }
        }
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            AnimationState::Idle => None,
            AnimationState::Running { next_tick } => Some(next_tick),
        }
    }
}
