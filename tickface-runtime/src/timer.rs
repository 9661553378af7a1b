//! Software timer queue
//!
//! Stands in for the watch's app-timer service. Timers fire in due-time
//! order; timers due at the same instant fire in the order they were
//! scheduled. There is no cancellation.

use heapless::Vec;
use tickface_hal::{AppTimer, TimerError, TimerToken};

/// Most timers armed at once
pub const MAX_TIMERS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct PendingTimer {
    due_ms: u64,
    /// Insertion order, breaks ties between equal due times
    seq: u32,
    token: TimerToken,
}

/// Timer queue keyed by due time
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u32,
    pending: Vec<PendingTimer, MAX_TIMERS>,
}

impl TimerQueue {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current time (ms since start)
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward; it never goes back
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Due time of the earliest armed timer
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before now
    pub fn pop_due(&mut self) -> Option<TimerToken> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= self.now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;

        Some(self.pending.swap_remove(index).token)
    }
}

impl AppTimer for TimerQueue {
    fn schedule(&mut self, delay_ms: u32, token: TimerToken) -> Result<(), TimerError> {
        let timer = PendingTimer {
            due_ms: self.now_ms + u64::from(delay_ms),
            seq: self.next_seq,
            token,
        };
        self.pending.push(timer).map_err(|_| {
            warn!("Timer queue full, dropping token {}", token.value());
            TimerError::QueueFull
        })?;

        self.next_seq = self.next_seq.wrapping_add(1);
        trace!("Timer {} due at {}", token.value(), timer.due_ms);
        Ok(())
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(30, TimerToken(3)).unwrap();
        timers.schedule(10, TimerToken(1)).unwrap();
        timers.schedule(20, TimerToken(2)).unwrap();

        assert_eq!(timers.next_due(), Some(10));
        assert_eq!(timers.pop_due(), None);

        timers.set_now(25);
        assert_eq!(timers.pop_due(), Some(TimerToken(1)));
        assert_eq!(timers.pop_due(), Some(TimerToken(2)));
        assert_eq!(timers.pop_due(), None);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_equal_due_times_fire_in_insertion_order() {
        let mut timers = TimerQueue::new();
        for token in 0..5 {
            timers.schedule(100, TimerToken(token)).unwrap();
        }

        timers.set_now(100);
        for token in 0..5 {
            assert_eq!(timers.pop_due(), Some(TimerToken(token)));
        }
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut timers = TimerQueue::new();
        timers.set_now(1_000);
        timers.schedule(1, TimerToken(0)).unwrap();
        assert_eq!(timers.next_due(), Some(1_001));
    }

    #[test]
    fn test_full_queue() {
        let mut timers = TimerQueue::new();
        for token in 0..MAX_TIMERS as u32 {
            timers.schedule(1, TimerToken(token)).unwrap();
        }
        assert_eq!(
            timers.schedule(1, TimerToken(99)),
            Err(TimerError::QueueFull)
        );
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut timers = TimerQueue::new();
        timers.set_now(50);
        timers.set_now(10);
        assert_eq!(timers.now_ms(), 50);
    }
}
