//! Wall-clock timer for measuring a single solver call.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart the measurement from now.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed_duration(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_duration().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
