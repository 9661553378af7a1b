//! Sprites played through the animation sequencer

use proptest::prelude::*;
use tickface_core::config::AnimationConfig;
use tickface_core::{Advance, AnimationSequencer};
use tickface_display::{DisplaySurface, LayerId, LayerStack, PixelFormat, Rect, Size};
use tickface_hal::ResourceId;
use tickface_sprite::{
    encode, ResourceTable, SpriteFrame, SpriteHeader, SpriteLoader, SpriteSequence,
};

const FRAME_SIZE: Size = Size::new(3, 2);

/// Encode a sprite whose frame N is filled with N and leak it as a bundle resource
fn bundle(delays: &[u32]) -> &'static [u8] {
    let pixels: Vec<Vec<u8>> = (0..delays.len())
        .map(|n| vec![n as u8; FRAME_SIZE.area()])
        .collect();
    let frames: Vec<SpriteFrame<'_>> = delays
        .iter()
        .zip(&pixels)
        .map(|(delay_ms, pixels)| SpriteFrame {
            delay_ms: *delay_ms,
            pixels,
        })
        .collect();

    let mut buffer = vec![0u8; 64 + delays.len() * 16];
    let len = encode(
        SpriteHeader::new(FRAME_SIZE, PixelFormat::Bit8),
        &frames,
        &mut buffer,
    )
    .unwrap()
    .len();
    buffer.truncate(len);
    Box::leak(buffer.into_boxed_slice())
}

fn surface() -> LayerStack {
    let mut surface = LayerStack::new(Size::new(144, 168));
    surface
        .add_layer(LayerId::Animation, Rect::new(47, 28, 3, 2))
        .unwrap();
    surface
}

#[test]
fn plays_bundled_sprite() {
    let table = ResourceTable::new().with(ResourceId::AnimationImage, bundle(&[100, 200, 300]));
    let mut loader = SpriteLoader::new(table);
    let mut seq: AnimationSequencer<SpriteSequence<'static>> =
        AnimationSequencer::new(ResourceId::AnimationImage, AnimationConfig::default());
    let mut surface = surface();

    let mut request = seq.ensure_loaded(&mut loader).unwrap();
    assert_eq!(request.delay_ms, 1);

    let mut delays = Vec::new();
    loop {
        match seq.advance_frame(request.generation, &mut surface) {
            Advance::Frame(next) => {
                delays.push(next.delay_ms);
                request = next;
            }
            Advance::Exhausted => break,
            other => panic!("unexpected {:?}", other),
        }
    }

    assert_eq!(delays, [100u32, 200, 300].repeat(3));
    let shown = surface.bitmap(LayerId::Animation).unwrap();
    assert_eq!(shown.pixels(), &[2; 6]);
}

#[test]
fn missing_sprite_faults_once() {
    let mut loader = SpriteLoader::new(ResourceTable::new());
    let mut seq: AnimationSequencer<SpriteSequence<'static>> =
        AnimationSequencer::new(ResourceId::AnimationImage, AnimationConfig::default());

    assert!(seq.ensure_loaded(&mut loader).is_none());
    assert!(seq.state().is_faulted());
    assert!(seq.ensure_loaded(&mut loader).is_none());
}

proptest! {
    #[test]
    fn delays_follow_sprite(delays in prop::collection::vec(1u32..5_000, 1..12), play_count in 1u32..4) {
        let table = ResourceTable::new().with(ResourceId::AnimationImage, bundle(&delays));
        let mut loader = SpriteLoader::new(table);
        let config = AnimationConfig { play_count, ..AnimationConfig::default() };
        let mut seq: AnimationSequencer<SpriteSequence<'static>> =
            AnimationSequencer::new(ResourceId::AnimationImage, config);
        let mut surface = surface();

        let mut generation = seq.ensure_loaded(&mut loader).unwrap().generation;
        let mut seen = Vec::new();
        while let Advance::Frame(next) = seq.advance_frame(generation, &mut surface) {
            seen.push(next.delay_ms);
            generation = next.generation;
        }

        prop_assert_eq!(seen, delays.repeat(play_count as usize));
        prop_assert_eq!(seq.allocations(), 1);
    }
}
