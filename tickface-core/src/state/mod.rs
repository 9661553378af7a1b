//! State machine for the animation sequencer
//!
//! The sequencer's behavior is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{FaultKind, SequencerEvent, SequencerState};
