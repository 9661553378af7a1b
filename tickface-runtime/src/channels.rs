//! Event channel between the runtime services and the face
//!
//! Every handler runs on one logical thread, so the channel needs no real
//! locking.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use tickface_core::state::Event;

/// Channel capacity for face events
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Events waiting to be dispatched to the face
pub type EventChannel = Channel<NoopRawMutex, Event, EVENT_CHANNEL_SIZE>;
