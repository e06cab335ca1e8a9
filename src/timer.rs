//! Deterministic periodic timers.
//!
//! Timers never read the clock. The caller feeds elapsed time through
//! [`Timer::advance`] and gets back how many periods completed, so the game
//! logic runs identically under a real frame loop and in tests.

use std::time::Duration;

/// A repeating timer driven by explicit time steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    period: Option<Duration>,
    elapsed: Duration,
}

impl Timer {
    /// A stopped timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            period: None,
            elapsed: Duration::ZERO,
        }
    }

    /// (Re)start with the given period, discarding accumulated time.
    ///
    /// A zero period leaves the timer stopped.
    pub fn start(&mut self, period: Duration) {
        self.period = (!period.is_zero()).then_some(period);
        self.elapsed = Duration::ZERO;
    }

    /// Stop the timer. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        self.period = None;
        self.elapsed = Duration::ZERO;
    }

    /// Whether the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.period.is_some()
    }

    /// Current period, if running.
    #[must_use]
    pub const fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Advance by `dt` and return the number of completed periods.
    ///
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Some(period) = self.period else {
            return 0;
        };
        self.elapsed += dt;
        let mut fired = 0u32;
        while self.elapsed >= period {
            self.elapsed -= period;
            fired = fired.saturating_add(1);
        }
        fired
    }
}
