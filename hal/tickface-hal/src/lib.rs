//! Tickface Host Abstraction Layer
//!
//! This crate defines the services a watch runtime hands to a face:
//! bundled resources, one-shot timers, wall-clock time, tap gestures
//! and battery state. The face logic is written against these traits
//! so the same code runs on a watch runtime and in host-side tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Face logic (tickface-core)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickface-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ watch runtime │       │ tickface-     │
//! │   bindings    │       │   runtime     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`resource::ResourceStore`] - Bundled asset lookup
//! - [`timer::AppTimer`] - One-shot timer registration
//! - [`clock::WallClock`] - Local wall-clock time
//!
//! Event payloads delivered by the runtime live in [`clock`], [`accel`]
//! and [`battery`].

#![no_std]
#![deny(unsafe_code)]

pub mod accel;
pub mod battery;
pub mod clock;
pub mod resource;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use accel::{Axis, TapEvent};
pub use battery::ChargeState;
pub use clock::{ClockTime, WallClock};
pub use resource::{ResourceId, ResourceStore};
pub use timer::{AppTimer, TimerError, TimerToken};
