//! Host runtime for the Tickface watch face
//!
//! Drives a [`tickface_core::WatchFace`] the way the watch does: one event
//! at a time, from a bounded channel, with frame-advance timers that cannot
//! be cancelled.
//!
//! ```text
//!   post ──► EventChannel ──► run_until_idle ──► WatchFace::handle
//!                 ▲                                    │
//!   advance ──────┤ MinuteTick                         ▼
//!                 └──────── FrameDue ◄────────── TimerQueue
//! ```

#![no_std]
#![deny(unsafe_code)]

// This must go first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod channels;
pub mod clock;
pub mod config;
pub mod event_loop;
pub mod timer;

pub use channels::{EventChannel, EVENT_CHANNEL_SIZE};
pub use clock::{SimClock, MINUTE_MS};
pub use config::{load_config, parse_config, ConfigError};
pub use event_loop::{EventLoop, SpriteEventLoop};
pub use timer::{TimerQueue, MAX_TIMERS};
