//! Cancellable one-shot countdowns.
//!
//! The board's two recurring behaviors (auto-advance, search inactivity)
//! are modeled as deadlines compared against an `Instant` injected by the
//! event loop, not as background tasks. That keeps every transition
//! synchronous and lets tests drive time explicitly.

use std::time::{Duration, Instant};

/// A cancellable deadline with a fixed interval.
///
/// At most one deadline is outstanding: [`Countdown::arm`] replaces any
/// existing one, and [`Countdown::cancel`] on an unarmed countdown is a
/// no-op. Recurrence is the caller's job (re-arm after a fire).
#[derive(Debug, Clone)]
pub struct Countdown {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    /// New unarmed countdown with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the countdown to fire `interval` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm. No-op when not armed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is outstanding.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it is due at `now`.
    ///
    /// Returns `true` exactly once per armed deadline; the caller decides
    /// whether to re-arm.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
