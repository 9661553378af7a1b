//! Battery "HP" meter

use core::fmt::Write;

use heapless::String;
use tickface_hal::ChargeState;

/// Hit points of a full battery
pub const MAX_HIT_POINTS: u8 = 20;

/// Battery level as a game health meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryMeter {
    level: u8,
}

impl BatteryMeter {
    pub const fn new(level: u8) -> Self {
        Self {
            level: if level > 100 { 100 } else { level },
        }
    }

    /// Take a new charge reading
    pub fn update(&mut self, state: ChargeState) {
        *self = Self::new(state.charge_percent);
    }

    /// Charge level (percent)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Filled width of a bar that is `full` pixels wide when charged
    pub fn bar_width(&self, full: u16) -> u16 {
        (u32::from(self.level) * u32::from(full) / 100) as u16
    }

    pub fn hit_points(&self) -> u8 {
        self.level / 5
    }

    /// "NN/20" label
    pub fn label(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(text, "{:02}/{}", self.hit_points(), MAX_HIT_POINTS);
        text
    }
}

impl Default for BatteryMeter {
    fn default() -> Self {
        Self::new(100)
    }
}
