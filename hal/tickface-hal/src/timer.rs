//! One-shot application timers
//!
//! The runtime fires each registered timer once, on the single event-loop
//! thread, after roughly the requested delay. There is no cancellation:
//! a face that restarts work must recognise stale expiries itself, which
//! is what the [`TimerToken`] payload is for.

/// Opaque value handed back when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerToken(pub u32);

impl TimerToken {
    /// Get the raw token value
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Errors from timer registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// The runtime has no free timer slots
    QueueFull,
}

/// One-shot timer service
pub trait AppTimer {
    /// Register a timer that fires once after `delay_ms` milliseconds
    ///
    /// When it fires the runtime delivers `token` back to the face.
    fn schedule(&mut self, delay_ms: u32, token: TimerToken) -> Result<(), TimerError>;

    /// Number of timers registered but not yet fired
    fn pending(&self) -> usize;
}
