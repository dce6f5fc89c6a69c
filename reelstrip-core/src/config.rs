//! Tuning for a carousel instance.
//!
//! Everything here has a default that matches the stock web carousel: a
//! 50 unit swipe threshold, animation armed 100 ms after the first placement
//! and a 600 ms `cubic-bezier(0.25, 0.1, 0.25, 1)` slide transition.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
pub const DEFAULT_ARM_DELAY_MS: u64 = 100;
pub const DEFAULT_TRANSITION_MS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Minimum drag distance (exclusive) before a release commits to a
    /// neighbouring slide. Shorter drags snap back.
    pub swipe_threshold: f32,
    /// Delay between the silent first placement and arming animations.
    pub arm_delay_ms: u64,
    /// Style handed to the visual binding for animated strip moves.
    pub transition: TransitionStyle,
    /// Text shown while a slide's caption is still resolving. `None` shows
    /// an empty caption.
    pub caption_placeholder: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            arm_delay_ms: DEFAULT_ARM_DELAY_MS,
            transition: TransitionStyle::default(),
            caption_placeholder: None,
        }
    }
}

impl CarouselConfig {
    pub fn arm_delay(&self) -> Duration {
        Duration::from_millis(self.arm_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigurationError::InvalidThreshold(
                self.swipe_threshold,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionStyle {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

impl TransitionStyle {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl fmt::Display for TransitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform {}s {}",
            self.duration().as_secs_f32(),
            self.easing
        )
    }
}

/// Timing curve for strip moves. Rendering is up to the visual binding;
/// `Display` yields the CSS spelling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    Ease,
    EaseInOut,
    CubicBezier([f32; 4]),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::CubicBezier([0.25, 0.1, 0.25, 1.0])
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}
