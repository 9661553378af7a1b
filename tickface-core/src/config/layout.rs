//! Layout geometry per display shape

use tickface_display::{Rect, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical display shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayShape {
    /// 144x168 rectangular display
    #[default]
    Rect,
    /// 180x180 round display
    Round,
}

impl DisplayShape {
    /// Screen dimensions for this shape
    pub const fn screen_size(self) -> Size {
        match self {
            DisplayShape::Rect => Size::new(144, 168),
            DisplayShape::Round => Size::new(180, 180),
        }
    }
}

/// Position of every layer on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Full screen
    pub screen: Size,
    /// Background image (full screen)
    pub background: Rect,
    /// Animated sprite
    pub animation: Rect,
    /// Battery bar; its width is the width of a full bar
    pub battery_bar: Rect,
    /// Battery "HP" label
    pub battery_text: Rect,
    /// Clock text
    pub time: Rect,
}

impl Layout {
    /// Default layout for a display shape
    pub const fn for_shape(shape: DisplayShape) -> Self {
        let screen = shape.screen_size();
        let w = screen.w;

        match shape {
            DisplayShape::Rect => Self {
                screen,
                background: Rect::from_size(screen),
                animation: Rect::new(47, 28, 50, 80),
                battery_bar: Rect::new(63, 146, 10, 5),
                battery_text: Rect::new(75, 143, w, 10),
                time: Rect::new(60, 113, w, 20),
            },
            DisplayShape::Round => Self {
                screen,
                background: Rect::from_size(screen),
                animation: Rect::new(65, 22, 50, 80),
                battery_bar: Rect::new(90, 140, 10, 5),
                battery_text: Rect::new(103, 137, w, 10),
                time: Rect::new(78, 107, w, 20),
            },
        }
    }

    /// Check that a layer starts on screen
    ///
    /// Text layers deliberately run past the right edge, so only the
    /// origin is checked.
    pub fn origin_on_screen(&self, rect: &Rect) -> bool {
        Rect::from_size(self.screen).contains(rect.origin)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_shape(DisplayShape::default())
    }
}
