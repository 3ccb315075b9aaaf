//! Trailing-edge debounce.
//!
//! [`Debouncer`] is a passive timer: it remembers the latest scheduled value and its
//! deadline, and hands the value back once the deadline has passed. The owner decides
//! when to look, usually by sleeping until [`Debouncer::deadline`] inside a
//! `tokio::select!` loop.

use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

/// Quiet period between the last keystroke and the search it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Collapses a burst of values into the last one, released after a quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Quiet period.
    delay: Duration,
    /// Latest value and the instant it becomes due.
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value`, replacing any pending value and restarting the timer.
    pub fn schedule(&mut self, value: T, now: Instant) {
        let replaced = self.pending.is_some();
        self.pending = Some((now + self.delay, value));
        trace!(replaced, delay_ms = self.delay.as_millis() as u64, "debounce scheduled");
    }

    /// Drops any pending value. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!("debounce cancelled");
        }
    }

    /// Returns true if a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the instant the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Takes the pending value if its deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// Takes the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }
}
