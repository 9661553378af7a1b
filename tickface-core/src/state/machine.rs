//! Sequencer state machine
//!
//! Animation behavior is a function of the current state and an event.

/// Sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    /// Sequence not opened yet
    Uninitialized,
    /// Frames are being decoded on a timer
    Playing,
    /// Loop budget spent, cursor rewound, waiting for a trigger
    Exhausted,
    /// Animation disabled for the rest of the session
    Faulted(FaultKind),
}

/// Reasons the animation can be disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Resource missing or unreadable at open time
    ResourceUnavailable,
    /// Frame buffer could not be allocated
    AllocationFailed,
    /// Decoding a frame failed mid-playback
    DecodeFailed,
}

/// Inputs to the sequencer state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerEvent {
    /// Playback (re)started from frame zero
    Triggered,
    /// A frame was decoded and shown
    FrameDecoded,
    /// Decode reported no loop budget left
    Exhausted,
    /// Unrecoverable failure
    Fault(FaultKind),
    /// Session torn down
    Unloaded,
}

impl SequencerState {
    /// Check if a sequence and buffer are held
    pub fn is_loaded(&self) -> bool {
        matches!(self, SequencerState::Playing | SequencerState::Exhausted)
    }

    /// Check if the animation has been disabled
    pub fn is_faulted(&self) -> bool {
        matches!(self, SequencerState::Faulted(_))
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SequencerEvent) -> Self {
        use SequencerEvent as E;
        use SequencerState as S;

        match (self, event) {
            // Teardown always returns to the start
            (_, E::Unloaded) => S::Uninitialized,

            // Faults are terminal for the session
            (S::Faulted(kind), _) => S::Faulted(kind),
            (_, E::Fault(kind)) => S::Faulted(kind),

            // Any trigger restarts playback
            (_, E::Triggered) => S::Playing,

            (S::Playing, E::FrameDecoded) => S::Playing,
            (S::Playing, E::Exhausted) => S::Exhausted,

            // Stale frame requests may still decode after exhaustion
            (S::Exhausted, E::FrameDecoded) => S::Playing,

            // Default: stay in current state
            _ => self,
        }
    }
}
