// src/scheduler.rs
use std::time::{Duration, Instant};

/// Cooperative fixed-period timer polled from the GUI update callback.
///
/// A tick is due immediately after `start`, and then one period after the
/// previous tick *finished*. Late polls never produce a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct SampleClock {
    period: Duration,
    next_due: Option<Instant>,
}

impl SampleClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// True if a tick should run now. The caller runs it, then calls [`Self::reschedule`].
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.next_due, Some(due) if now >= due)
    }

    /// Arms the next tick one period after `finished_at`.
    pub fn reschedule(&mut self, finished_at: Instant) {
        if self.next_due.is_some() {
            self.next_due = Some(finished_at + self.period);
        }
    }

    /// How long the event loop may sleep before the next tick.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
