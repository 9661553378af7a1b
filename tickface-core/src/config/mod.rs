//! Configuration types
//!
//! Everything that differs between watch models or user preferences is
//! resolved into a `FaceConfig` once at startup.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
