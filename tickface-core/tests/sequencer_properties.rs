//! Property tests for the animation sequencer

use proptest::prelude::*;
use tickface_core::config::{AnimationConfig, StaleTimerPolicy};
use tickface_core::state::{FaultKind, SequencerState};
use tickface_core::traits::{FrameSequence, FrameStep, SequenceError, SequenceSource};
use tickface_core::{Advance, AnimationSequencer};
use tickface_display::{Bitmap, DisplaySurface, LayerId, LayerStack, PixelFormat, Rect, Size};
use tickface_hal::ResourceId;

/// Frame N is a 2x2 bitmap filled with N + 1
struct Counting {
    frames: u32,
    cursor: u32,
    budget: u32,
    fail_after: Option<u32>,
    decoded: u32,
}

impl FrameSequence for Counting {
    fn frame_size(&self) -> Size {
        Size::new(2, 2)
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
        if self.fail_after == Some(self.decoded) {
            return Err(SequenceError::Corrupt);
        }
        target.fill(self.cursor as u8 + 1);
        self.decoded += 1;
        self.cursor += 1;
        if self.cursor == self.frames {
            self.cursor = 0;
            self.budget -= 1;
        }
        Ok(FrameStep::Frame { delay_ms: 50 })
    }

    fn restart(&mut self) {
        self.cursor = 0;
    }
}

struct Source {
    frames: u32,
    fail_after: Option<u32>,
    opens: u32,
}

impl Source {
    fn new(frames: u32) -> Self {
        Self {
            frames,
            fail_after: None,
            opens: 0,
        }
    }
}

impl SequenceSource for Source {
    type Sequence = Counting;

    fn open(&mut self, _id: ResourceId) -> Result<Counting, SequenceError> {
        self.opens += 1;
        Ok(Counting {
            frames: self.frames,
            cursor: 0,
            budget: 0,
            fail_after: self.fail_after,
            decoded: 0,
        })
    }
}

fn surface() -> LayerStack {
    let mut surface = LayerStack::new(Size::new(144, 168));
    surface
        .add_layer(LayerId::Animation, Rect::new(47, 28, 2, 2))
        .unwrap();
    surface
}

fn sequencer(play_count: u32) -> AnimationSequencer<Counting> {
    let config = AnimationConfig {
        play_count,
        ..AnimationConfig::default()
    };
    AnimationSequencer::new(ResourceId::AnimationImage, config)
}

/// Advance until something other than a frame comes back
fn run_to_end(
    seq: &mut AnimationSequencer<Counting>,
    mut generation: u32,
    surface: &mut LayerStack,
) -> (u32, Advance) {
    let mut frames = 0;
    loop {
        match seq.advance_frame(generation, surface) {
            Advance::Frame(next) => {
                frames += 1;
                generation = next.generation;
            }
            other => return (frames, other),
        }
    }
}

#[test]
fn three_frames_three_plays() {
    let mut seq = sequencer(3);
    let mut source = Source::new(3);
    let mut surface = surface();

    let request = seq.ensure_loaded(&mut source).unwrap();
    let (frames, last) = run_to_end(&mut seq, request.generation, &mut surface);

    assert_eq!(frames, 9);
    assert_eq!(last, Advance::Exhausted);
    assert_eq!(seq.state(), SequencerState::Exhausted);
}

proptest! {
    #[test]
    fn budget_resets_on_every_trigger(triggers in 1usize..20, play_count in 1u32..10) {
        let mut seq = sequencer(play_count);
        let mut source = Source::new(4);

        for _ in 0..triggers {
            prop_assert!(seq.ensure_loaded(&mut source).is_some());
            prop_assert_eq!(seq.loop_budget(), play_count);
        }
    }

    #[test]
    fn exhausts_after_play_count_cycles(frames in 1u32..12, play_count in 1u32..6) {
        let mut seq = sequencer(play_count);
        let mut source = Source::new(frames);
        let mut surface = surface();

        let request = seq.ensure_loaded(&mut source).unwrap();
        let (drawn, last) = run_to_end(&mut seq, request.generation, &mut surface);

        prop_assert_eq!(drawn, play_count * frames);
        prop_assert_eq!(last, Advance::Exhausted);
        prop_assert_eq!(seq.cursor(), Some(0));
        prop_assert_eq!(surface.bitmap_updates(LayerId::Animation), drawn);
    }

    #[test]
    fn buffer_allocated_once(triggers in 2usize..10) {
        let mut seq = sequencer(3);
        let mut source = Source::new(3);

        for _ in 0..triggers {
            seq.ensure_loaded(&mut source);
        }

        prop_assert_eq!(seq.allocations(), 1);
        prop_assert_eq!(source.opens, 1);
    }

    #[test]
    fn decode_failure_keeps_last_frame(frames in 2u32..8, fail_after in 1u32..20) {
        let mut seq = sequencer(3);
        let mut source = Source::new(frames);
        source.fail_after = Some(fail_after);
        let mut surface = surface();

        let request = seq.ensure_loaded(&mut source).unwrap();
        let (drawn, last) = run_to_end(&mut seq, request.generation, &mut surface);

        if fail_after < 3 * frames {
            prop_assert_eq!(drawn, fail_after);
            prop_assert_eq!(last, Advance::Faulted(FaultKind::DecodeFailed));

            // Last good frame is still shown and still in the buffer
            let expected = ((fail_after - 1) % frames) as u8 + 1;
            let shown = surface.bitmap(LayerId::Animation).unwrap();
            prop_assert!(shown.pixels().iter().all(|p| *p == expected));
            prop_assert!(seq.frame().unwrap().pixels().iter().all(|p| *p == expected));
            prop_assert!(seq.ensure_loaded(&mut source).is_none());
        } else {
            prop_assert_eq!(last, Advance::Exhausted);
        }
    }

    #[test]
    fn mid_cycle_trigger_restarts_at_frame_zero(frames in 2u32..10, steps in 1u32..25) {
        let mut seq = sequencer(3);
        let mut source = Source::new(frames);
        let mut surface = surface();

        let mut generation = seq.ensure_loaded(&mut source).unwrap().generation;
        for _ in 0..steps {
            match seq.advance_frame(generation, &mut surface) {
                Advance::Frame(next) => generation = next.generation,
                _ => break,
            }
        }

        let fresh = seq.ensure_loaded(&mut source).unwrap();
        prop_assert_eq!(seq.loop_budget(), 3);
        prop_assert_eq!(seq.cursor(), Some(0));

        let advanced = matches!(
            seq.advance_frame(fresh.generation, &mut surface),
            Advance::Frame(_)
        );
        prop_assert!(advanced);
        let shown = surface.bitmap(LayerId::Animation).unwrap();
        prop_assert_eq!(shown.pixels()[0], 1);
    }

    #[test]
    fn only_newest_generation_advances(restarts in 1u32..8) {
        let mut seq = sequencer(3);
        let mut source = Source::new(3);
        let mut surface = surface();

        let mut requests = Vec::new();
        for _ in 0..=restarts {
            requests.push(seq.ensure_loaded(&mut source).unwrap());
        }
        let newest = requests.pop().unwrap();

        for old in requests {
            prop_assert_eq!(seq.advance_frame(old.generation, &mut surface), Advance::Stale);
        }
        let advanced = matches!(
            seq.advance_frame(newest.generation, &mut surface),
            Advance::Frame(_)
        );
        prop_assert!(advanced);
    }
}

#[test]
fn honor_policy_advances_stale_requests() {
    let config = AnimationConfig {
        stale_timers: StaleTimerPolicy::Honor,
        ..AnimationConfig::default()
    };
    let mut seq: AnimationSequencer<Counting> =
        AnimationSequencer::new(ResourceId::AnimationImage, config);
    let mut source = Source::new(3);
    let mut surface = surface();

    let old = seq.ensure_loaded(&mut source).unwrap();
    let new = seq.ensure_loaded(&mut source).unwrap();

    match seq.advance_frame(old.generation, &mut surface) {
        Advance::Frame(next) => assert_eq!(next.generation, new.generation),
        other => panic!("unexpected {:?}", other),
    }
}
