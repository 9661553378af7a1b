//! Display surface trait
//!
//! Defines the interface between the face and the watch's layer compositor.

use crate::bitmap::Bitmap;
use crate::geometry::{Rect, Size};

/// Display surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Layer was never added, or was removed
    UnknownLayer,
    /// All layer slots are in use
    TooManyLayers,
    /// Content does not fit the layer (text too long, too many fills)
    BufferOverflow,
}

/// Layers making up the face, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    Background,
    Animation,
    BatteryBar,
    BatteryText,
    Time,
}

/// Colors available to the face
///
/// Black-and-white displays get a fallback for each color; see
/// [`Color::fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Clear,
    Black,
    White,
    Red,
    Yellow,
}

impl Color {
    /// Closest color on a black-and-white display
    pub const fn fallback(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Yellow => Color::White,
            other => other,
        }
    }

    /// Pick `self` on color displays and its fallback otherwise
    pub const fn for_display(self, color_display: bool) -> Self {
        if color_display {
            self
        } else {
            self.fallback()
        }
    }
}

/// Layer-based display surface
///
/// Content set on a layer stays until replaced. Nothing is redrawn until
/// the runtime decides to; the face only marks layers dirty.
pub trait DisplaySurface {
    /// Full screen dimensions
    fn size(&self) -> Size;

    /// Add a layer at `frame`, on top of existing layers
    fn add_layer(&mut self, id: LayerId, frame: Rect) -> Result<(), DisplayError>;

    /// Remove a layer and drop its content
    fn remove_layer(&mut self, id: LayerId) -> Result<(), DisplayError>;

    /// Show a bitmap in a layer
    ///
    /// The surface takes a copy; the caller keeps ownership of its buffer.
    fn set_bitmap(&mut self, id: LayerId, bitmap: &Bitmap) -> Result<(), DisplayError>;

    /// Show text in a layer
    fn set_text(&mut self, id: LayerId, text: &str) -> Result<(), DisplayError>;

    /// Clear any fills on a layer
    fn clear_fills(&mut self, id: LayerId) -> Result<(), DisplayError>;

    /// Fill a rectangle in layer-local coordinates
    fn fill_rect(&mut self, id: LayerId, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Request a redraw of the layer's region
    fn mark_dirty(&mut self, id: LayerId) -> Result<(), DisplayError>;

    /// Frame of a layer in screen coordinates
    fn layer_frame(&self, id: LayerId) -> Option<Rect>;
}
