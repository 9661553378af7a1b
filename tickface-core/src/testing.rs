//! Test doubles shared by unit tests

use heapless::Vec;
use tickface_display::{Bitmap, PixelFormat, Size};
use tickface_hal::{AppTimer, ClockTime, ResourceId, TimerError, TimerToken, WallClock};

use crate::traits::{FrameSequence, FrameStep, SequenceError, SequenceSource};

/// Sequence whose frame N fills the buffer with N + 1
pub struct Fixture {
    pub size: Size,
    pub frames: u32,
    pub cursor: u32,
    pub budget: u32,
    pub fail_at: Option<u32>,
}

impl FrameSequence for Fixture {
    fn frame_size(&self) -> Size {
        self.size
    }

    fn pixel_format(&self) -> PixelFormat {
        PixelFormat::Bit8
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }

    fn set_play_count(&mut self, count: u32) {
        self.budget = count;
    }

    fn loop_budget(&self) -> u32 {
        self.budget
    }

    fn cursor(&self) -> u32 {
        self.cursor
    }

    fn decode_next(&mut self, target: &mut Bitmap) -> Result<FrameStep, SequenceError> {
        if self.budget == 0 {
            return Ok(FrameStep::Exhausted);
        }
        if self.fail_at == Some(self.cursor) {
            return Err(SequenceError::Corrupt);
        }
        target.fill(self.cursor as u8 + 1);
        self.cursor += 1;
        if self.cursor == self.frames {
            self.cursor = 0;
            self.budget -= 1;
        }
        Ok(FrameStep::Frame { delay_ms: 100 })
    }

    fn restart(&mut self) {
        self.cursor = 0;
    }
}

/// Opens a fixture for every resource not listed as missing
pub struct Loader {
    pub size: Size,
    pub frames: u32,
    pub fail_at: Option<u32>,
    pub missing: &'static [ResourceId],
    opens: [u32; 5],
}

impl Loader {
    pub fn new(frames: u32) -> Self {
        Self {
            size: Size::new(4, 2),
            frames,
            fail_at: None,
            missing: &[],
            opens: [0; 5],
        }
    }

    pub fn opens(&self, id: ResourceId) -> u32 {
        self.opens[id.as_u8() as usize]
    }
}

impl SequenceSource for Loader {
    type Sequence = Fixture;

    fn open(&mut self, id: ResourceId) -> Result<Fixture, SequenceError> {
        if self.missing.contains(&id) {
            return Err(SequenceError::NotFound);
        }
        self.opens[id.as_u8() as usize] += 1;
        Ok(Fixture {
            size: self.size,
            frames: self.frames,
            cursor: 0,
            budget: 0,
            fail_at: self.fail_at,
        })
    }
}

/// Records scheduled timers without firing them
#[derive(Default)]
pub struct RecordingTimer {
    pub scheduled: Vec<(u32, TimerToken), 16>,
}

impl AppTimer for RecordingTimer {
    fn schedule(&mut self, delay_ms: u32, token: TimerToken) -> Result<(), TimerError> {
        self.scheduled
            .push((delay_ms, token))
            .map_err(|_| TimerError::QueueFull)
    }

    fn pending(&self) -> usize {
        self.scheduled.len()
    }
}

/// Clock stuck at one time
pub struct FixedClock {
    pub time: ClockTime,
    pub twenty_four_hour: bool,
}

impl WallClock for FixedClock {
    fn now(&self) -> ClockTime {
        self.time
    }

    fn is_24h_style(&self) -> bool {
        self.twenty_four_hour
    }
}
