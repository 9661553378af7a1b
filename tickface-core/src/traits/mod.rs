//! Collaborator traits
//!
//! These traits define the interface between the face logic and the
//! resource decoders supplied by the runtime or by `tickface-sprite`.

pub mod sequence;

pub use sequence::{FrameSequence, FrameStep, SequenceError, SequenceSource};
