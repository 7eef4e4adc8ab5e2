//! Cooperative per-question countdown.
//!
//! The timer does not run on its own; the presentation layer drives it at a
//! one-second cadence. It reports expiry exactly once, and cancellation makes
//! every later tick a no-op so a stale timer can never fire against a future
//! question.

/// Seconds allowed per question.
pub const QUESTION_TIME_SECS: u32 = 30;

/// Remaining seconds at or below which the UI shows a warning state.
pub const WARNING_SECS: u32 = 10;

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting down.
    Running { remaining: u32, warning: bool },
    /// Reached zero on this tick. Reported once.
    Expired,
    /// Cancelled or already expired; nothing happened.
    Idle,
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining: u32,
    cancelled: bool,
    expired: bool,
}

impl CountdownTimer {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            cancelled: false,
            expired: false,
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if self.cancelled || self.expired {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
                warning: self.remaining <= WARNING_SECS,
            }
        }
    }

    /// Stop the countdown. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
