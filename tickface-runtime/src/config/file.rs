//! TOML face configuration
//!
//! Every key is optional; anything left out keeps the default for the
//! display shape.
//!
//! ```toml
//! shape = "round"
//! clock = "twelve_hour"
//!
//! [features]
//! gesture = true
//! battery = true
//!
//! [animation]
//! play_count = 3
//! stale_timers = "ignore"
//! load_on = "first_tick"
//!
//! [layout.time]
//! x = 60
//! y = 113
//! w = 144
//! h = 20
//! ```

use serde::Deserialize;
use tickface_core::config::{
    ClockStyle, DisplayShape, FaceConfig, LoadTrigger, StaleTimerPolicy,
};
use tickface_display::Rect;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaceFile {
    pub shape: Option<DisplayShape>,
    pub clock: Option<ClockStyle>,
    #[serde(default)]
    pub features: FeaturesFile,
    #[serde(default)]
    pub animation: AnimationFile,
    #[serde(default)]
    pub layout: LayoutFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesFile {
    pub animation: Option<bool>,
    pub gesture: Option<bool>,
    pub battery: Option<bool>,
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationFile {
    pub play_count: Option<u32>,
    pub first_frame_delay_ms: Option<u32>,
    pub stale_timers: Option<StaleTimerPolicy>,
    pub load_on: Option<LoadTrigger>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    pub animation: Option<RectFile>,
    pub battery_bar: Option<RectFile>,
    pub battery_text: Option<RectFile>,
    pub time: Option<RectFile>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectFile {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
}

impl From<RectFile> for Rect {
    fn from(r: RectFile) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

impl FaceFile {
    /// Apply the file on top of the defaults for its shape
    pub fn resolve(&self) -> FaceConfig {
        let mut config = FaceConfig::for_shape(self.shape.unwrap_or_default());

        if let Some(clock) = self.clock {
            config.clock = clock;
        }

        let features = &mut config.features;
        features.animation = self.features.animation.unwrap_or(features.animation);
        features.gesture = self.features.gesture.unwrap_or(features.gesture);
        features.battery = self.features.battery.unwrap_or(features.battery);
        features.color = self.features.color.unwrap_or(features.color);

        let animation = &mut config.animation;
        animation.play_count = self.animation.play_count.unwrap_or(animation.play_count);
        animation.first_frame_delay_ms = self
            .animation
            .first_frame_delay_ms
            .unwrap_or(animation.first_frame_delay_ms);
        animation.stale_timers = self.animation.stale_timers.unwrap_or(animation.stale_timers);
        animation.load_on = self.animation.load_on.unwrap_or(animation.load_on);

        let layout = &mut config.layout;
        let overrides = [
            (&mut layout.animation, self.layout.animation),
            (&mut layout.battery_bar, self.layout.battery_bar),
            (&mut layout.battery_text, self.layout.battery_text),
            (&mut layout.time, self.layout.time),
        ];
        for (rect, value) in overrides {
            if let Some(value) = value {
                *rect = value.into();
            }
        }

        config
    }
}
