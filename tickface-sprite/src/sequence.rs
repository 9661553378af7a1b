//! Frame sequence over a bundled sprite

use tickface_core::traits::{FrameSequence, FrameStep, SequenceError};
use tickface_display::{Bitmap, PixelFormat, Size};

use crate::format::{Sprite, SpriteError};

/// Plays a sprite's frames in order, a bounded number of times
#[derive(Debug, Clone)]
pub struct SpriteSequence<'a> {
    sprite: Sprite<'a>,
    format: PixelFormat,
    cursor: u32,
    loop_budget: u32,
}

impl<'a> SpriteSequence<'a> {
    /// Wrap a parsed sprite; the loop budget starts at zero
    pub fn new(sprite: Sprite<'a>) -> Result<Self, SpriteError> {
        let format = sprite.header.pixel_format()?;
        Ok(Self {
            sprite,
            format,
            cursor: 0,
            loop_budget: 0,
        })
    }

    /// Parse a sprite resource
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SpriteError> {
        Self::new(Sprite::from_bytes(bytes)?)
    }
}

impl FrameSequence for SpriteSequence<'_> {
    fn frame_size(&self) -> Size {
        self.sprite.header.size()
    }

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    fn frame_count(&self) -> u32 {
        self.sprite.frame_count() as u32
    }

    fn set_play_count(&mut self, count: u32) {
        self.loop_budget = count;
    }

    fn loop_budget(&self) -> u32 {
        self.loop_budget
    }

    fn cursor(&self) -> u32 {
        self.cursor
    }

    fn decode_next(&mut self, target: &mut Bitmap) -> Result<FrameStep, SequenceError> {
        if self.loop_budget == 0 {
            return Ok(FrameStep::Exhausted);
        }

        if target.size() != self.frame_size() || target.format() != self.format {
            return Err(SequenceError::BufferMismatch);
        }

        let frame = self
            .sprite
            .frame(self.cursor as usize)
            .ok_or(SequenceError::Corrupt)?;
        target
            .copy_from(frame.pixels)
            .map_err(|_| SequenceError::BufferMismatch)?;
        let delay_ms = frame.delay_ms;

        self.cursor += 1;
        if self.cursor >= self.frame_count() {
            self.cursor = 0;
            self.loop_budget -= 1;
        }

        Ok(FrameStep::Frame { delay_ms })
    }

    fn restart(&mut self) {
        self.cursor = 0;
    }
}
