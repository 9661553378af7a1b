//! Frame-advance animation loop

pub mod sequencer;

pub use sequencer::{Advance, AnimationSequencer, FrameRequest};
