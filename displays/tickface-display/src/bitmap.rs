//! Frame buffers
//!
//! A `Bitmap` is allocated once with the dimensions of the image it will
//! hold and then overwritten in place. Capacity is fixed at compile time;
//! a request that does not fit fails instead of allocating.

use heapless::Vec;

use crate::geometry::Size;

/// Largest supported buffer: a full 180x180 round display at 8 bits per pixel
pub const MAX_BITMAP_BYTES: usize = 180 * 180;

/// Pixel storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 1 bit per pixel, rows padded to whole bytes
    Bit1,
    /// 8 bits per pixel, 2 bits each of alpha, red, green, blue
    #[default]
    Bit8,
}

impl PixelFormat {
    /// Bytes needed for one row of `width` pixels
    pub const fn row_bytes(self, width: u16) -> usize {
        match self {
            PixelFormat::Bit1 => (width as usize + 7) / 8,
            PixelFormat::Bit8 => width as usize,
        }
    }

    /// Bytes needed for a full image of `size`
    pub const fn image_bytes(self, size: Size) -> usize {
        self.row_bytes(size.w) * size.h as usize
    }

    /// Format code used in encoded resources
    pub const fn code(self) -> u8 {
        match self {
            PixelFormat::Bit1 => 1,
            PixelFormat::Bit8 => 8,
        }
    }

    /// Parse a format code from an encoded resource
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PixelFormat::Bit1),
            8 => Some(PixelFormat::Bit8),
            _ => None,
        }
    }
}

/// Bitmap errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Requested image does not fit in `MAX_BITMAP_BYTES`
    TooLarge,
    /// Zero width or height
    Empty,
    /// Source data length does not match the bitmap
    LengthMismatch,
}

/// Fixed-capacity image buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    format: PixelFormat,
    pixels: Vec<u8, MAX_BITMAP_BYTES>,
}

impl Bitmap {
    /// Allocate a zeroed bitmap
    pub fn blank(size: Size, format: PixelFormat) -> Result<Self, BitmapError> {
        if size.is_empty() {
            return Err(BitmapError::Empty);
        }

        let len = format.image_bytes(size);
        if len > MAX_BITMAP_BYTES {
            return Err(BitmapError::TooLarge);
        }

        let mut pixels = Vec::new();
        pixels
            .resize(len, 0)
            .map_err(|_| BitmapError::TooLarge)?;

        Ok(Self {
            size,
            format,
            pixels,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite every pixel from `data`
    ///
    /// The bitmap is left untouched if the length does not match.
    pub fn copy_from(&mut self, data: &[u8]) -> Result<(), BitmapError> {
        if data.len() != self.pixels.len() {
            return Err(BitmapError::LengthMismatch);
        }
        self.pixels.copy_from_slice(data);
        Ok(())
    }

    /// Set every byte to `value`
    pub fn fill(&mut self, value: u8) {
        for px in self.pixels.iter_mut() {
            *px = value;
        }
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("size", &self.size)
            .field("format", &self.format)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Bitmap {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Bitmap[{}x{} {} bytes]",
            self.size.w,
            self.size.h,
            self.pixels.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_sized_to_format() {
        let bmp = Bitmap::blank(Size::new(50, 80), PixelFormat::Bit8).unwrap();
        assert_eq!(bmp.pixels().len(), 4000);

        let bmp = Bitmap::blank(Size::new(50, 80), PixelFormat::Bit1).unwrap();
        assert_eq!(bmp.pixels().len(), 7 * 80);
    }

    #[test]
    fn test_blank_rejects_oversized() {
        let result = Bitmap::blank(Size::new(181, 180), PixelFormat::Bit8);
        assert_eq!(result.unwrap_err(), BitmapError::TooLarge);
    }

    #[test]
    fn test_blank_rejects_empty() {
        let result = Bitmap::blank(Size::new(0, 10), PixelFormat::Bit8);
        assert_eq!(result.unwrap_err(), BitmapError::Empty);
    }

    #[test]
    fn test_copy_from_length_mismatch_keeps_pixels() {
        let mut bmp = Bitmap::blank(Size::new(2, 2), PixelFormat::Bit8).unwrap();
        bmp.copy_from(&[1, 2, 3, 4]).unwrap();

        assert_eq!(bmp.copy_from(&[9, 9, 9]), Err(BitmapError::LengthMismatch));
        assert_eq!(bmp.pixels(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_format_codes() {
        assert_eq!(PixelFormat::from_code(PixelFormat::Bit8.code()), Some(PixelFormat::Bit8));
        assert_eq!(PixelFormat::from_code(PixelFormat::Bit1.code()), Some(PixelFormat::Bit1));
        assert_eq!(PixelFormat::from_code(4), None);
    }
}
