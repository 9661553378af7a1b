//! Display abstraction and shared components for Tickface
//!
//! This crate provides:
//! - Geometry types (`Point`, `Size`, `Rect`) in screen pixels
//! - `Bitmap`, a fixed-capacity frame buffer reused across decodes
//! - `DisplaySurface` trait for layer-based watch displays
//! - `LayerStack`, an in-memory surface with dirty-region tracking
//!
//! # Architecture
//!
//! The face never draws pixels itself. It hands bitmaps, text and fills to
//! named layers and marks them dirty; the runtime decides when to redraw.
//!
//! ## Surfaces
//!
//! - **Runtime surfaces**: bindings that forward layer updates to the
//!   watch's own compositor.
//! - **`LayerStack`**: keeps the last content of every layer in memory.
//!   Used by the host runtime and by tests to observe what would be shown.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod bitmap;
pub mod geometry;
pub mod layers;

// Re-export key types
pub use backend::{Color, DisplayError, DisplaySurface, LayerId};
pub use bitmap::{Bitmap, BitmapError, PixelFormat, MAX_BITMAP_BYTES};
pub use geometry::{Point, Rect, Size};
pub use layers::{LayerStack, MAX_LAYERS, MAX_TEXT_LEN};
