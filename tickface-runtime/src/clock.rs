//! Simulated wall clock

use tickface_hal::{ClockTime, WallClock};

/// Milliseconds per minute
pub const MINUTE_MS: u64 = 60_000;

/// Wall clock derived from a start time and elapsed runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimClock {
    start: ClockTime,
    elapsed_ms: u64,
    twenty_four_hour: bool,
}

impl SimClock {
    pub const fn new(start: ClockTime, twenty_four_hour: bool) -> Self {
        Self {
            start,
            elapsed_ms: 0,
            twenty_four_hour,
        }
    }

    pub fn set_elapsed(&mut self, elapsed_ms: u64) {
        self.elapsed_ms = elapsed_ms;
    }

    /// Runtime at which the next minute boundary is crossed
    pub fn next_minute_ms(&self) -> u64 {
        (self.elapsed_ms / MINUTE_MS + 1) * MINUTE_MS
    }

    /// Wall time at a runtime offset
    pub fn time_at(&self, elapsed_ms: u64) -> ClockTime {
        let minutes = (elapsed_ms / MINUTE_MS) % (24 * 60);
        ClockTime::from_minutes(self.start.as_minutes() + minutes as u32)
    }
}

impl WallClock for SimClock {
    fn now(&self) -> ClockTime {
        self.time_at(self.elapsed_ms)
    }

    fn is_24h_style(&self) -> bool {
        self.twenty_four_hour
    }
}
