//! Accelerometer tap gestures

/// Accelerometer axis a tap was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A tap detected by the accelerometer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapEvent {
    /// Axis with the strongest response
    pub axis: Axis,
    /// Direction along the axis: positive, negative, or 0 if undetermined
    pub direction: i32,
}

impl TapEvent {
    /// Create a tap event
    pub const fn new(axis: Axis, direction: i32) -> Self {
        Self { axis, direction }
    }

    /// Check if the tap has a definite direction
    pub const fn is_directional(&self) -> bool {
        self.direction != 0
    }
}
