//! Board-agnostic core logic for the Tickface watch face
//!
//! This crate contains all face logic that does not depend on a specific
//! watch runtime:
//!
//! - Sequence traits (multi-frame image decoding)
//! - Sequencer state machine and runtime events
//! - Frame-advance animation loop
//! - Clock text and battery meter
//! - Configuration type definitions
//! - The [`face::WatchFace`] application context

#![no_std]
#![deny(unsafe_code)]

// This must go first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod face;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use animation::{Advance, AnimationSequencer, FrameRequest};
pub use face::WatchFace;
