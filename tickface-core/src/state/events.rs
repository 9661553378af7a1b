//! Events delivered to the face by the runtime

use tickface_hal::{ChargeState, ClockTime, TapEvent, TimerToken};

/// Events that drive the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Service events
    /// Wall clock crossed a minute boundary
    MinuteTick(ClockTime),
    /// Accelerometer detected a tap
    Tap(TapEvent),
    /// Battery charge state changed
    BatteryChanged(ChargeState),

    // Timer events
    /// A frame-advance timer fired
    FrameDue(TimerToken),
}
