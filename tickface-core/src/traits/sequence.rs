//! Multi-frame image sequences
//!
//! A sequence decodes one frame at a time into a caller-owned bitmap and
//! replays itself a bounded number of times.

use tickface_display::{Bitmap, PixelFormat, Size};
use tickface_hal::ResourceId;

/// Errors from opening or decoding a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Resource is not in the bundle
    NotFound,
    /// Resource data is malformed
    Corrupt,
    /// Resource uses a format this decoder cannot handle
    Unsupported,
    /// Target bitmap does not match the frame dimensions or format
    BufferMismatch,
}

/// Outcome of a decode step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameStep {
    /// A frame was written; show it for `delay_ms` before the next one
    Frame { delay_ms: u32 },
    /// No loop budget left; nothing was written
    Exhausted,
}

/// Decoder for a multi-frame image
///
/// Implementations keep a cursor (next frame to decode) and a loop budget
/// (full play-throughs remaining). The budget drops by one each time the
/// last frame of a cycle is decoded; once it reaches zero every further
/// `decode_next` reports [`FrameStep::Exhausted`].
pub trait FrameSequence {
    /// Dimensions of a single frame
    fn frame_size(&self) -> Size;

    /// Pixel format frames are decoded into
    fn pixel_format(&self) -> PixelFormat;

    /// Number of frames in one cycle
    fn frame_count(&self) -> u32;

    /// Set the number of play-throughs before exhaustion
    fn set_play_count(&mut self, count: u32);

    /// Play-throughs remaining
    fn loop_budget(&self) -> u32;

    /// Index of the frame the next decode will produce
    fn cursor(&self) -> u32;

    /// Decode the next frame into `target`
    ///
    /// On error `target` must be left untouched.
    fn decode_next(&mut self, target: &mut Bitmap) -> Result<FrameStep, SequenceError>;

    /// Move the cursor back to the first frame
    ///
    /// The loop budget is not changed.
    fn restart(&mut self);
}

/// Opens sequences from bundled resources
pub trait SequenceSource {
    type Sequence: FrameSequence;

    /// Open the resource as a frame sequence
    fn open(&mut self, id: ResourceId) -> Result<Self::Sequence, SequenceError>;
}
