//! Configuration type definitions
//!
//! These types represent the face configuration. The runtime builds one
//! from defaults for the display shape plus any user overrides.

use tickface_display::{PixelFormat, MAX_BITMAP_BYTES};

use super::layout::{DisplayShape, Layout};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full play-throughs per trigger
pub const DEFAULT_PLAY_COUNT: u32 = 3;

/// Delay before the first frame after a trigger (ms)
pub const DEFAULT_FIRST_FRAME_DELAY_MS: u32 = 1;

/// Upper bound on the play count
pub const MAX_PLAY_COUNT: u32 = 100;

/// Clock text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClockStyle {
    /// Follow the watch's system setting
    #[default]
    System,
    /// "HH:MM"
    TwentyFourHour,
    /// "hh:MM AM"
    TwelveHour,
}

impl ClockStyle {
    /// Resolve to a 24-hour flag given the system preference
    pub const fn is_24h(self, system_24h: bool) -> bool {
        match self {
            ClockStyle::System => system_24h,
            ClockStyle::TwentyFourHour => true,
            ClockStyle::TwelveHour => false,
        }
    }
}

/// What to do when a frame timer from before a restart fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StaleTimerPolicy {
    /// Drop it; only the newest timer chain advances frames
    #[default]
    Ignore,
    /// Advance anyway; every armed chain keeps running
    Honor,
}

/// When the animation sequence is first opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadTrigger {
    /// Open and play as soon as the face is shown
    #[default]
    WindowLoad,
    /// Wait for the first minute tick
    FirstTick,
}

/// Optional features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Features {
    /// Sprite animates; when off its first frame is shown statically
    pub animation: bool,
    /// A directional tap replays the animation
    pub gesture: bool,
    /// Battery meter is shown
    pub battery: bool,
    /// Display has color; otherwise colors fall back to black and white
    pub color: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            animation: true,
            gesture: false,
            battery: false,
            color: true,
        }
    }
}

/// Animation playback configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationConfig {
    /// Full play-throughs per trigger
    pub play_count: u32,
    /// Delay before the first frame after a trigger (ms)
    pub first_frame_delay_ms: u32,
    /// Handling of timers armed before a restart
    pub stale_timers: StaleTimerPolicy,
    /// When the sequence is first opened
    pub load_on: LoadTrigger,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            play_count: DEFAULT_PLAY_COUNT,
            first_frame_delay_ms: DEFAULT_FIRST_FRAME_DELAY_MS,
            stale_timers: StaleTimerPolicy::Ignore,
            load_on: LoadTrigger::WindowLoad,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Play count is zero or above `MAX_PLAY_COUNT`
    InvalidPlayCount,
    /// A layer starts outside the screen
    LayerOffScreen,
    /// Layout screen size does not match the display shape
    ScreenMismatch,
    /// Animation layer cannot be backed by a frame buffer
    AnimationTooLarge,
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    pub shape: DisplayShape,
    pub layout: Layout,
    pub features: Features,
    pub clock: ClockStyle,
    pub animation: AnimationConfig,
}

impl FaceConfig {
    /// Defaults for a display shape
    pub fn for_shape(shape: DisplayShape) -> Self {
        Self {
            shape,
            layout: Layout::for_shape(shape),
            features: Features::default(),
            clock: ClockStyle::default(),
            animation: AnimationConfig::default(),
        }
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let play_count = self.animation.play_count;
        if play_count == 0 || play_count > MAX_PLAY_COUNT {
            return Err(ConfigError::InvalidPlayCount);
        }

        if self.layout.screen != self.shape.screen_size() {
            return Err(ConfigError::ScreenMismatch);
        }

        let layout = &self.layout;
        let layers = [
            layout.background,
            layout.animation,
            layout.battery_bar,
            layout.battery_text,
            layout.time,
        ];
        if !layers.iter().all(|r| layout.origin_on_screen(r)) {
            return Err(ConfigError::LayerOffScreen);
        }

        if PixelFormat::Bit8.image_bytes(layout.animation.size) > MAX_BITMAP_BYTES {
            return Err(ConfigError::AnimationTooLarge);
        }

        Ok(())
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::for_shape(DisplayShape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_display::Rect;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(FaceConfig::for_shape(DisplayShape::Rect).validate(), Ok(()));
        assert_eq!(FaceConfig::for_shape(DisplayShape::Round).validate(), Ok(()));
    }

    #[test]
    fn test_default_animation() {
        let config = FaceConfig::default();
        assert_eq!(config.animation.play_count, 3);
        assert_eq!(config.animation.first_frame_delay_ms, 1);
        assert_eq!(config.animation.stale_timers, StaleTimerPolicy::Ignore);
        assert_eq!(config.animation.load_on, LoadTrigger::WindowLoad);
        assert!(config.features.animation);
        assert!(!config.features.gesture);
    }

    #[test]
    fn test_rejects_zero_play_count() {
        let mut config = FaceConfig::default();
        config.animation.play_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPlayCount));
    }

    #[test]
    fn test_rejects_offscreen_layer() {
        let mut config = FaceConfig::default();
        config.layout.time = Rect::new(200, 10, 20, 20);
        assert_eq!(config.validate(), Err(ConfigError::LayerOffScreen));
    }

    #[test]
    fn test_rejects_shape_mismatch() {
        let mut config = FaceConfig::for_shape(DisplayShape::Round);
        config.layout = Layout::for_shape(DisplayShape::Rect);
        assert_eq!(config.validate(), Err(ConfigError::ScreenMismatch));
    }

    #[test]
    fn test_clock_style_resolution() {
        assert!(ClockStyle::System.is_24h(true));
        assert!(!ClockStyle::System.is_24h(false));
        assert!(ClockStyle::TwentyFourHour.is_24h(false));
        assert!(!ClockStyle::TwelveHour.is_24h(true));
    }
}
