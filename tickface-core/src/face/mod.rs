//! Watch face application context
//!
//! [`WatchFace`] owns every piece of display state for one session and
//! routes runtime events to the sequencer, clock text and battery meter.
//!
//! ```text
//!   MinuteTick ──► clock text ──┐
//!   Tap ────────────────────────┼──► ensure_loaded ──► FrameRequest ──► AppTimer
//!                               │                                          │
//!   FrameDue ◄──────────────────┼──────────────────────────────────────────┘
//!      │                        │
//!      └──► advance_frame ──────┴──► DisplaySurface (bitmap, dirty)
//!
//!   BatteryChanged ──► battery meter ──► DisplaySurface (fills, label)
//! ```

pub mod battery;
pub mod clock;

pub use battery::{BatteryMeter, MAX_HIT_POINTS};
pub use clock::{format_time, CLOCK_TEXT_LEN};

use heapless::String;
use tickface_display::{Bitmap, Color, DisplayError, DisplaySurface, LayerId, Rect};
use tickface_hal::{AppTimer, ChargeState, ClockTime, ResourceId, TapEvent, WallClock};

use crate::animation::{Advance, AnimationSequencer, FrameRequest};
use crate::config::{FaceConfig, LoadTrigger};
use crate::state::Event;
use crate::traits::{FrameSequence, SequenceError, SequenceSource};

/// Log and drop a display error; the face keeps running
fn check(result: Result<(), DisplayError>) {
    if let Err(e) = result {
        warn!("Display update failed: {:?}", e);
    }
}

/// Watch face session
pub struct WatchFace<L: SequenceSource> {
    config: FaceConfig,
    loader: L,
    sequencer: AnimationSequencer<L::Sequence>,
    battery: BatteryMeter,
    clock_text: String<CLOCK_TEXT_LEN>,
    twenty_four_hour: bool,
    loaded: bool,
}

impl<L: SequenceSource> WatchFace<L> {
    /// Create a face; nothing is drawn until [`load`](Self::load)
    pub fn new(config: FaceConfig, loader: L) -> Self {
        Self {
            config,
            loader,
            sequencer: AnimationSequencer::new(ResourceId::AnimationImage, config.animation),
            battery: BatteryMeter::default(),
            clock_text: String::new(),
            twenty_four_hour: true,
            loaded: false,
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn sequencer(&self) -> &AnimationSequencer<L::Sequence> {
        &self.sequencer
    }

    pub fn battery(&self) -> &BatteryMeter {
        &self.battery
    }

    /// Text currently shown on the time layer
    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Build the layers and show the initial content
    ///
    /// The animation starts right away unless it is configured to wait for
    /// the first minute tick.
    pub fn load<D, T, C>(
        &mut self,
        surface: &mut D,
        timer: &mut T,
        clock: &C,
        battery: ChargeState,
    ) where
        D: DisplaySurface,
        T: AppTimer,
        C: WallClock,
    {
        let layout = self.config.layout;
        info!("Loading face for {:?} display", self.config.shape);

        check(surface.add_layer(LayerId::Background, layout.background));
        check(surface.add_layer(LayerId::Animation, layout.animation));
        check(surface.add_layer(LayerId::Time, layout.time));
        if self.config.features.battery {
            check(surface.add_layer(LayerId::BatteryBar, layout.battery_bar));
            check(surface.add_layer(LayerId::BatteryText, layout.battery_text));
        }

        match self.decode_still(ResourceId::BackgroundImage) {
            Ok(bitmap) => check(surface.set_bitmap(LayerId::Background, &bitmap)),
            Err(e) => warn!("No background image: {:?}", e),
        }
        self.show_static_frame(surface);

        self.twenty_four_hour = self.config.clock.is_24h(clock.is_24h_style());
        self.update_time(clock.now(), surface);

        if self.config.features.battery {
            self.update_battery(battery, surface);
        }

        for id in [LayerId::Background, LayerId::Animation, LayerId::Time] {
            check(surface.mark_dirty(id));
        }

        self.loaded = true;

        if self.config.features.animation
            && self.config.animation.load_on == LoadTrigger::WindowLoad
        {
            self.trigger(timer);
        }
    }

    /// Dispatch one runtime event
    pub fn handle<D, T>(&mut self, event: Event, surface: &mut D, timer: &mut T)
    where
        D: DisplaySurface,
        T: AppTimer,
    {
        if !self.loaded {
            trace!("Dropping event before load: {:?}", event);
            return;
        }

        match event {
            Event::MinuteTick(time) => {
                self.update_time(time, surface);
                if self.config.features.animation {
                    self.trigger(timer);
                }
            }
            Event::Tap(tap) => self.on_tap(tap, timer),
            Event::BatteryChanged(state) => {
                if self.config.features.battery {
                    self.update_battery(state, surface);
                }
            }
            Event::FrameDue(token) => {
                let advance = self.sequencer.advance_frame(token.value(), surface);
                if let Advance::Frame(request) = advance {
                    Self::schedule(timer, request);
                }
            }
        }
    }

    /// Tear down the session
    ///
    /// Frame timers still armed will find nothing to advance.
    pub fn unload<D: DisplaySurface>(&mut self, surface: &mut D) {
        self.sequencer.unload();

        for id in [
            LayerId::Background,
            LayerId::Animation,
            LayerId::Time,
            LayerId::BatteryBar,
            LayerId::BatteryText,
        ] {
            if surface.layer_frame(id).is_some() {
                check(surface.remove_layer(id));
            }
        }

        self.loaded = false;
        info!("Face unloaded");
    }

    fn on_tap<T: AppTimer>(&mut self, tap: TapEvent, timer: &mut T) {
        if !self.config.features.gesture || !self.config.features.animation {
            return;
        }
        if tap.is_directional() {
            debug!("Tap on {:?}, replaying", tap.axis);
            self.trigger(timer);
        }
    }

    /// Restart the animation from frame zero
    fn trigger<T: AppTimer>(&mut self, timer: &mut T) {
        if let Some(request) = self.sequencer.ensure_loaded(&mut self.loader) {
            Self::schedule(timer, request);
        }
    }

    fn schedule<T: AppTimer>(timer: &mut T, request: FrameRequest) {
        if let Err(e) = timer.schedule(request.delay_ms, request.token()) {
            warn!("Failed to schedule frame: {:?}", e);
        }
    }

    fn update_time<D: DisplaySurface>(&mut self, time: ClockTime, surface: &mut D) {
        self.clock_text = format_time(time, self.twenty_four_hour);
        check(surface.set_text(LayerId::Time, &self.clock_text));
        check(surface.mark_dirty(LayerId::Time));
    }

    fn update_battery<D: DisplaySurface>(&mut self, state: ChargeState, surface: &mut D) {
        self.battery.update(state);

        let bar = self.config.layout.battery_bar;
        let color = self.config.features.color;
        let filled = Rect::new(0, 0, self.battery.bar_width(bar.size.w), bar.size.h);

        check(surface.clear_fills(LayerId::BatteryBar));
        check(surface.fill_rect(
            LayerId::BatteryBar,
            Rect::new(0, 0, bar.size.w, bar.size.h),
            Color::Red.for_display(color),
        ));
        check(surface.fill_rect(LayerId::BatteryBar, filled, Color::Yellow.for_display(color)));
        check(surface.set_text(LayerId::BatteryText, &self.battery.label()));

        check(surface.mark_dirty(LayerId::BatteryBar));
        check(surface.mark_dirty(LayerId::BatteryText));
    }

    /// Show a still on the animation layer until playback starts
    fn show_static_frame<D: DisplaySurface>(&mut self, surface: &mut D) {
        let still = self
            .decode_still(ResourceId::StaticImage)
            .or_else(|_| self.decode_still(ResourceId::AnimationImage));

        match still {
            Ok(bitmap) => check(surface.set_bitmap(LayerId::Animation, &bitmap)),
            Err(e) => warn!("No static frame: {:?}", e),
        }
    }

    /// Decode the first frame of a resource
    fn decode_still(&mut self, id: ResourceId) -> Result<Bitmap, SequenceError> {
        let mut sequence = self.loader.open(id)?;
        sequence.set_play_count(1);

        let mut bitmap = Bitmap::blank(sequence.frame_size(), sequence.pixel_format())
            .map_err(|_| SequenceError::Unsupported)?;
        sequence.decode_next(&mut bitmap)?;
        Ok(bitmap)
    }
}
