//! Clock text formatting

use core::fmt::Write;

use heapless::String;
use tickface_hal::ClockTime;

/// Longest clock text ("12:59 PM")
pub const CLOCK_TEXT_LEN: usize = 10;

/// Format a time as "HH:MM" or "hh:MM AM"
pub fn format_time(time: ClockTime, twenty_four_hour: bool) -> String<CLOCK_TEXT_LEN> {
    let mut text = String::new();

    // Capacity covers the longest output
    let _ = if twenty_four_hour {
        write!(text, "{:02}:{:02}", time.hour, time.minute)
    } else {
        let suffix = if time.hour < 12 { "AM" } else { "PM" };
        let hour = match time.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(text, "{:02}:{:02} {}", hour, time.minute, suffix)
    };

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_24h() {
        assert_eq!(format_time(at(0, 0), true).as_str(), "00:00");
        assert_eq!(format_time(at(9, 5), true).as_str(), "09:05");
        assert_eq!(format_time(at(23, 59), true).as_str(), "23:59");
    }

    #[test]
    fn test_12h() {
        assert_eq!(format_time(at(0, 0), false).as_str(), "12:00 AM");
        assert_eq!(format_time(at(9, 5), false).as_str(), "09:05 AM");
        assert_eq!(format_time(at(12, 30), false).as_str(), "12:30 PM");
        assert_eq!(format_time(at(23, 59), false).as_str(), "11:59 PM");
    }
}
