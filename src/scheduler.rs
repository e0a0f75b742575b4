//! Fixed-period tick source
//!
//! Wall-clock time goes in, a whole number of simulation ticks comes out.
//! Pausing stops the clock itself, so no time piles up while suspended.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICK_RATE_HZ};

/// Longest frame accepted in one update; anything longer is treated as a hitch
const MAX_FRAME: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Scheduler {
    period: Duration,
    accumulator: Duration,
    running: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

impl Scheduler {
    /// Scheduler ticking `rate_hz` times per second, initially stopped
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start (or restart) ticking with an empty accumulator
    pub fn resume(&mut self) {
        if !self.running {
            self.accumulator = Duration::ZERO;
            self.running = true;
        }
    }

    /// Stop ticking and drop any partial tick
    pub fn pause(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Feed elapsed wall-clock time. Returns how many ticks are due now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME);

        let mut due = 0;
        while self.accumulator >= self.period && due < MAX_SUBSTEPS {
            self.accumulator -= self.period;
            due += 1;
        }
        due
    }
}
