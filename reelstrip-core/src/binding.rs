//! Capabilities the controller drives.
//!
//! The carousel never touches concrete elements. A host supplies one
//! [`VisualBinding`] for the track, slides, indicators and caption, and one
//! [`MediaBinding`] for the per-slide players. Slides and indicators are
//! addressed by index.

use crate::config::TransitionStyle;
use crate::error::PlaybackRejected;

/// How a strip offset change should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackMotion {
    /// Jump straight to the new offset.
    Instant,
    /// Ease to the new offset.
    Animated(TransitionStyle),
}

impl TrackMotion {
    pub fn is_animated(&self) -> bool {
        matches!(self, TrackMotion::Animated(_))
    }
}

pub trait VisualBinding {
    /// Number of slide elements present.
    fn slide_count(&self) -> usize;

    /// Number of indicator elements present.
    fn indicator_count(&self) -> usize;

    /// Extent of the viewport along the drag axis, in the same units as
    /// pointer coordinates.
    fn viewport_extent(&self) -> f32;

    /// Width of the whole strip, in percent of the viewport.
    fn set_track_width(&mut self, percent: f32);

    /// Width of one slide, in percent of the strip.
    fn set_slide_width(&mut self, index: usize, percent: f32);

    /// Horizontal strip offset, in percent of the strip.
    fn set_track_offset(&mut self, percent: f32, motion: TrackMotion);

    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    fn set_caption(&mut self, text: &str);
}

pub trait MediaBinding {
    /// Start playback. The environment may refuse.
    fn play(&mut self, index: usize) -> Result<(), PlaybackRejected>;

    fn pause(&mut self, index: usize);

    /// Seek back to the start position.
    fn rewind(&mut self, index: usize);
}
