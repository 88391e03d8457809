//! Debouncer for lookup requests
//!
//! Holds at most one pending deadline. Each `schedule` replaces the previous
//! one, so a burst of edits collapses into a single fire once input has been
//! quiet for the whole window.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_window_ms: u64) -> Self {
        Self {
            quiet_window: Duration::from_millis(quiet_window_ms),
            deadline: None,
        }
    }

    #[cfg(test)]
    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    /// Arm (or re-arm) the deadline relative to `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_window);
    }

    /// Drop the pending deadline without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns true exactly once per arm.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, for sizing the event poll timeout
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
