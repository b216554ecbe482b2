//! Fixed-step tick clock.
//!
//! Wall time between frames is accumulated and paid out as whole ticks, so the
//! simulation advances at the same rate regardless of how fast frames are
//! drawn. Accumulated lag is capped; after a stall the game resumes instead of
//! fast-forwarding.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    max_lag: Duration,
    lag: Duration,
}

impl TickClock {
    pub fn new(interval: Duration, max_lag: Duration) -> Self {
        Self {
            interval,
            max_lag: max_lag.max(interval),
            lag: Duration::ZERO,
        }
    }

    /// Add elapsed wall time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.lag = (self.lag + elapsed).min(self.max_lag);
        let mut due = 0;
        while self.lag >= self.interval {
            self.lag -= self.interval;
            due += 1;
        }
        due
    }

    /// [`advance`](Self::advance) for a game that may be hidden.
    ///
    /// While hidden no ticks are paid out and pending lag is dropped, so the
    /// game resumes where it was left when it is shown again.
    pub fn advance_visible(&mut self, elapsed: Duration, visible: bool) -> u32 {
        if !visible {
            self.reset();
            return 0;
        }
        self.advance(elapsed)
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.lag)
    }

    /// Drop any pending partial tick (used after a restart).
    pub fn reset(&mut self) {
        self.lag = Duration::ZERO;
    }
}
