//! Sprite resource encoding and validation

use heapless::Vec;
use serde::{Deserialize, Serialize};
use tickface_core::traits::SequenceError;
use tickface_display::{PixelFormat, Size, MAX_BITMAP_BYTES};

/// Resource magic
pub const SPRITE_MAGIC: [u8; 4] = *b"TFSP";

/// Current format version
pub const SPRITE_VERSION: u8 = 1;

/// Most frames a sprite may hold
pub const MAX_FRAMES: usize = 64;

/// Sprite parsing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteError {
    /// Postcard could not decode the bytes
    Deserialize,
    /// Output buffer too small while encoding
    Serialize,
    /// Magic bytes do not match
    BadMagic,
    /// Version is not `SPRITE_VERSION`
    UnsupportedVersion(u8),
    /// Pixel format code is unknown
    UnsupportedFormat(u8),
    /// Frame does not fit a frame buffer
    TooLarge,
    /// Sprite has no frames
    NoFrames,
    /// A frame's pixel data is the wrong length
    PixelLengthMismatch { frame: u16 },
}

impl From<SpriteError> for SequenceError {
    fn from(e: SpriteError) -> Self {
        match e {
            SpriteError::UnsupportedVersion(_)
            | SpriteError::UnsupportedFormat(_)
            | SpriteError::TooLarge => SequenceError::Unsupported,
            _ => SequenceError::Corrupt,
        }
    }
}

/// Fixed part of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpriteHeader {
    pub magic: [u8; 4],
    pub version: u8,
    pub width: u16,
    pub height: u16,
    /// `PixelFormat::code`
    pub format: u8,
}

impl SpriteHeader {
    /// Header for the current version
    pub const fn new(size: Size, format: PixelFormat) -> Self {
        Self {
            magic: SPRITE_MAGIC,
            version: SPRITE_VERSION,
            width: size.w,
            height: size.h,
            format: format.code(),
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel format, if the code is known
    pub fn pixel_format(&self) -> Result<PixelFormat, SpriteError> {
        PixelFormat::from_code(self.format).ok_or(SpriteError::UnsupportedFormat(self.format))
    }

    /// Check magic and version, returning the per-frame pixel length
    fn frame_bytes(&self) -> Result<usize, SpriteError> {
        if self.magic != SPRITE_MAGIC {
            return Err(SpriteError::BadMagic);
        }
        if self.version != SPRITE_VERSION {
            return Err(SpriteError::UnsupportedVersion(self.version));
        }

        let bytes = self.pixel_format()?.image_bytes(self.size());
        if bytes == 0 || bytes > MAX_BITMAP_BYTES {
            return Err(SpriteError::TooLarge);
        }
        Ok(bytes)
    }
}

/// One frame of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFrame<'a> {
    /// How long the frame stays up (ms)
    pub delay_ms: u32,
    pub pixels: &'a [u8],
}

/// A parsed sprite borrowing its pixels from the resource bytes
#[derive(Debug, Clone, Deserialize)]
pub struct Sprite<'a> {
    pub header: SpriteHeader,
    #[serde(borrow)]
    pub frames: Vec<SpriteFrame<'a>, MAX_FRAMES>,
}

impl<'a> Sprite<'a> {
    /// Parse and validate a sprite resource
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SpriteError> {
        let sprite: Sprite<'a> =
            postcard::from_bytes(bytes).map_err(|_| SpriteError::Deserialize)?;
        validate(&sprite.header, &sprite.frames)?;
        Ok(sprite)
    }

    pub fn frame(&self, index: usize) -> Option<&SpriteFrame<'a>> {
        self.frames.get(index)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

fn validate(header: &SpriteHeader, frames: &[SpriteFrame<'_>]) -> Result<(), SpriteError> {
    let expected = header.frame_bytes()?;

    if frames.is_empty() {
        return Err(SpriteError::NoFrames);
    }

    if let Some(frame) = frames.iter().position(|f| f.pixels.len() != expected) {
        return Err(SpriteError::PixelLengthMismatch { frame: frame as u16 });
    }

    Ok(())
}

#[derive(Serialize)]
struct SpriteRef<'a> {
    header: SpriteHeader,
    frames: &'a [SpriteFrame<'a>],
}

/// Encode a sprite into `buffer`, returning the used part
///
/// The sprite is validated first, so anything this writes parses back.
pub fn encode<'b>(
    header: SpriteHeader,
    frames: &[SpriteFrame<'_>],
    buffer: &'b mut [u8],
) -> Result<&'b mut [u8], SpriteError> {
    validate(&header, frames)?;
    if frames.len() > MAX_FRAMES {
        return Err(SpriteError::TooLarge);
    }

    let sprite = SpriteRef { header, frames };
    postcard::to_slice(&sprite, buffer).map_err(|_| SpriteError::Serialize)
}
