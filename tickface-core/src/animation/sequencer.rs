//! Animation sequencer
//!
//! Drives a multi-frame sequence one frame per timer expiry, replays it a
//! bounded number of times, and restarts it on external triggers.
//!
//! The sequencer never talks to the timer service itself. Operations that
//! want a frame-advance scheduled return a [`FrameRequest`]; the caller
//! registers it and hands the generation back to [`AnimationSequencer::advance_frame`]
//! when the timer fires. Timers cannot be cancelled, so each restart starts
//! a new generation and requests from older generations are stale.

use tickface_display::{Bitmap, DisplaySurface, LayerId};
use tickface_hal::{ResourceId, TimerToken};

use crate::config::{AnimationConfig, StaleTimerPolicy};
use crate::state::{FaultKind, SequencerEvent, SequencerState};
use crate::traits::{FrameSequence, FrameStep, SequenceSource};

/// A frame-advance the caller should schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameRequest {
    /// Delay before the advance (ms)
    pub delay_ms: u32,
    /// Generation the request belongs to
    pub generation: u32,
}

impl FrameRequest {
    /// Timer token carrying the generation
    pub const fn token(&self) -> TimerToken {
        TimerToken(self.generation)
    }
}

/// Result of a frame-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// A frame was drawn; schedule the next advance
    Frame(FrameRequest),
    /// Loop budget spent; cursor rewound, nothing scheduled
    Exhausted,
    /// Request from an older generation, ignored
    Stale,
    /// Nothing loaded
    Idle,
    /// Animation is disabled
    Faulted(FaultKind),
}

/// Animation sequencer
///
/// Owns the opened sequence and the single frame buffer it decodes into.
/// Both are created on the first trigger and kept until [`unload`].
///
/// [`unload`]: AnimationSequencer::unload
pub struct AnimationSequencer<S: FrameSequence> {
    state: SequencerState,
    resource: ResourceId,
    config: AnimationConfig,
    sequence: Option<S>,
    buffer: Option<Bitmap>,
    /// Bumped on every restart and on unload
    generation: u32,
    /// Frames drawn since the last restart
    frames_drawn: u32,
    /// Frame buffers allocated this session
    allocations: u32,
}

impl<S: FrameSequence> AnimationSequencer<S> {
    /// Create a sequencer for a bundled resource
    pub fn new(resource: ResourceId, config: AnimationConfig) -> Self {
        Self {
            state: SequencerState::Uninitialized,
            resource,
            config,
            sequence: None,
            buffer: None,
            generation: 0,
            frames_drawn: 0,
            allocations: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Current generation
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Play-throughs remaining (0 when nothing is loaded)
    pub fn loop_budget(&self) -> u32 {
        self.sequence.as_ref().map(|s| s.loop_budget()).unwrap_or(0)
    }

    /// Index of the frame the next advance will decode
    pub fn cursor(&self) -> Option<u32> {
        self.sequence.as_ref().map(|s| s.cursor())
    }

    /// Frames drawn since the last restart
    pub fn frames_drawn(&self) -> u32 {
        self.frames_drawn
    }

    /// Frame buffers allocated this session
    pub fn allocations(&self) -> u32 {
        self.allocations
    }

    /// Last decoded frame
    pub fn frame(&self) -> Option<&Bitmap> {
        self.buffer.as_ref()
    }

    /// Check if the sequence and buffer exist
    pub fn is_loaded(&self) -> bool {
        self.sequence.is_some() && self.buffer.is_some()
    }

    fn apply(&mut self, event: SequencerEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            debug!("Sequencer: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    fn fault(&mut self, kind: FaultKind) {
        warn!("Animation disabled: {:?}", kind);
        self.apply(SequencerEvent::Fault(kind));
    }

    /// Open the sequence if needed and restart playback from frame zero
    ///
    /// The sequence and its frame buffer are only created the first time;
    /// later calls rewind the cursor and reset the loop budget. Returns the
    /// first frame-advance to schedule, or `None` if the animation is
    /// disabled.
    pub fn ensure_loaded<L>(&mut self, loader: &mut L) -> Option<FrameRequest>
    where
        L: SequenceSource<Sequence = S>,
    {
        if self.state.is_faulted() {
            return None;
        }

        if self.sequence.is_none() {
            match loader.open(self.resource) {
                Ok(sequence) => {
                    info!(
                        "Opened {:?}: {} frames",
                        self.resource,
                        sequence.frame_count()
                    );
                    self.sequence = Some(sequence);
                }
                Err(e) => {
                    warn!("Failed to open {:?}: {:?}", self.resource, e);
                    self.fault(FaultKind::ResourceUnavailable);
                    return None;
                }
            }
        }

        if self.buffer.is_none() {
            let sequence = self.sequence.as_ref()?;
            match Bitmap::blank(sequence.frame_size(), sequence.pixel_format()) {
                Ok(bitmap) => {
                    self.buffer = Some(bitmap);
                    self.allocations += 1;
                }
                Err(e) => {
                    warn!("Frame buffer allocation failed: {:?}", e);
                    self.fault(FaultKind::AllocationFailed);
                    return None;
                }
            }
        }

        let sequence = self.sequence.as_mut()?;
        sequence.restart();
        sequence.set_play_count(self.config.play_count);

        self.generation = self.generation.wrapping_add(1);
        self.frames_drawn = 0;
        self.apply(SequencerEvent::Triggered);

        Some(FrameRequest {
            delay_ms: self.config.first_frame_delay_ms,
            generation: self.generation,
        })
    }

    /// Decode and show the next frame
    ///
    /// Called when a scheduled frame-advance fires. On success the animation
    /// layer is updated and marked dirty, and the next advance is returned.
    /// On exhaustion the cursor is rewound and nothing is scheduled. A decode
    /// error disables the animation and leaves the last frame on screen.
    pub fn advance_frame<D>(&mut self, generation: u32, surface: &mut D) -> Advance
    where
        D: DisplaySurface,
    {
        if let SequencerState::Faulted(kind) = self.state {
            return Advance::Faulted(kind);
        }

        if generation != self.generation {
            match self.config.stale_timers {
                StaleTimerPolicy::Ignore => {
                    trace!("Ignoring stale frame request {}", generation);
                    return Advance::Stale;
                }
                StaleTimerPolicy::Honor => {
                    trace!("Honoring stale frame request {}", generation);
                }
            }
        }

        let (Some(sequence), Some(buffer)) = (&mut self.sequence, &mut self.buffer) else {
            return Advance::Idle;
        };

        match sequence.decode_next(buffer) {
            Ok(FrameStep::Frame { delay_ms }) => {
                if let Err(e) = surface.set_bitmap(LayerId::Animation, buffer) {
                    warn!("Failed to show frame: {:?}", e);
                }
                if let Err(e) = surface.mark_dirty(LayerId::Animation) {
                    warn!("Failed to mark animation dirty: {:?}", e);
                }

                self.frames_drawn += 1;
                self.apply(SequencerEvent::FrameDecoded);

                Advance::Frame(FrameRequest {
                    delay_ms,
                    generation: self.generation,
                })
            }
            Ok(FrameStep::Exhausted) => {
                sequence.restart();
                debug!("Animation exhausted after {} frames", self.frames_drawn);
                self.apply(SequencerEvent::Exhausted);
                Advance::Exhausted
            }
            Err(e) => {
                warn!("Frame decode failed: {:?}", e);
                self.fault(FaultKind::DecodeFailed);
                Advance::Faulted(FaultKind::DecodeFailed)
            }
        }
    }

    /// Drop the sequence and frame buffer at session end
    ///
    /// Any timer still armed becomes stale.
    pub fn unload(&mut self) {
        self.sequence = None;
        self.buffer = None;
        self.generation = self.generation.wrapping_add(1);
        self.frames_drawn = 0;
        self.apply(SequencerEvent::Unloaded);
    }
}
