//! Screen geometry in pixels
//!
//! Origin is the top-left corner; x grows right, y grows down.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

impl Size {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from position and dimensions
    pub const fn new(x: i16, y: i16, w: u16, h: u16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Rectangle at the origin covering `size`
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::new(0, 0),
            size,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.origin.x as i32 + self.size.w as i32
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.origin.y as i32 + self.size.h as i32
    }

    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        let (x, y) = (p.x as i32, p.y as i32);
        x >= self.origin.x as i32
            && x < self.right()
            && y >= self.origin.y as i32
            && y < self.bottom()
    }

    /// Smallest rectangle containing both
    ///
    /// Empty rectangles do not contribute.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let left = self.origin.x.min(other.origin.x);
        let top = self.origin.y.min(other.origin.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect::new(
            left,
            top,
            (right - left as i32) as u16,
            (bottom - top as i32) as u16,
        )
    }

    /// Same rectangle with its width replaced
    pub const fn with_width(&self, w: u16) -> Rect {
        Rect::new(self.origin.x, self.origin.y, w, self.size.h)
    }
}
