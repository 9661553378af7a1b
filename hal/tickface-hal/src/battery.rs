//! Battery state service

/// Battery charge state reported by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeState {
    /// Charge level in percent (0-100)
    pub charge_percent: u8,
    /// Battery is currently charging
    pub is_charging: bool,
    /// Charger is connected
    pub is_plugged: bool,
}

impl ChargeState {
    /// Create a discharging state at the given level
    pub const fn discharging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_charging: false,
            is_plugged: false,
        }
    }
}

impl Default for ChargeState {
    fn default() -> Self {
        Self::discharging(100)
    }
}
