//! Wall-clock time
//!
//! The runtime ticks the face once per minute boundary and can be asked
//! for the current local time at any moment.

/// Local time of day, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
}

impl ClockTime {
    /// Create a time, returning `None` if either field is out of range
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Create a time from minutes since midnight (wraps at 24h)
    pub const fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % (24 * 60);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// Minutes since midnight
    pub const fn as_minutes(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

/// Source of the current local time
pub trait WallClock {
    /// Current local time
    fn now(&self) -> ClockTime;

    /// Whether the user prefers a 24-hour clock
    fn is_24h_style(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ClockTime::new(23, 59).is_some());
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
    }

    #[test]
    fn test_minutes_wrap_at_midnight() {
        let t = ClockTime::from_minutes(24 * 60 + 61);
        assert_eq!(t, ClockTime { hour: 1, minute: 1 });
        assert_eq!(t.as_minutes(), 61);
    }
}
