//! Carousel controller: the single owner and mutator of carousel state.
//!
//! Every index change goes through [`CarouselController::go_to_with`], which
//! moves the strip, flips the active markers, resynchronises media and
//! refreshes the caption. Everything else (buttons, indicators, drags,
//! media end, caption arrival) is routed through [`CarouselController::update`].

use crate::binding::{MediaBinding, TrackMotion, VisualBinding};
use crate::captions::CaptionProvider;
use crate::config::CarouselConfig;
use crate::error::{CarouselError, ConfigurationError, Result};
use crate::fetch::CaptionFetcher;
use crate::gesture::{GestureRecognizer, NavigationIntent};
use crate::messages::CarouselMessage;
use crate::registry::SlideRegistry;

/// Two-phase animation protocol. The first placement happens while
/// `Placing`; once armed, transitions animate for the carousel's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Placing,
    Armed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_initialized: bool,
    pub phase: AnimationPhase,
}

impl CarouselState {
    pub fn is_animated(&self) -> bool {
        self.phase == AnimationPhase::Armed
    }
}

/// Width of one slide, in percent of the strip.
pub fn slide_width_percent(count: usize) -> f32 {
    100.0 / count as f32
}

/// Resting strip offset that centres slide `index`.
pub fn strip_offset_percent(index: usize, count: usize) -> f32 {
    -(index as f32 * slide_width_percent(count))
}

#[derive(Debug)]
pub struct CarouselController<V, M> {
    registry: SlideRegistry,
    captions: CaptionProvider,
    gesture: GestureRecognizer,
    config: CarouselConfig,
    state: CarouselState,
    visual: V,
    media: M,
}

impl<V, M> CarouselController<V, M>
where
    V: VisualBinding,
    M: MediaBinding,
{
    /// Wire a controller to its collaborators, checking that the bound
    /// elements match the registry one-to-one.
    pub fn new(
        registry: SlideRegistry,
        captions: CaptionProvider,
        visual: V,
        media: M,
        config: CarouselConfig,
    ) -> Result<Self> {
        config.validate()?;

        let slides = registry.count();
        if visual.slide_count() != slides {
            return Err(ConfigurationError::SlideElementMismatch {
                slides,
                elements: visual.slide_count(),
            }
            .into());
        }
        if visual.indicator_count() != slides {
            return Err(ConfigurationError::IndicatorMismatch {
                slides,
                indicators: visual.indicator_count(),
            }
            .into());
        }

        Ok(Self {
            gesture: GestureRecognizer::new(config.swipe_threshold),
            registry,
            captions,
            config,
            state: CarouselState::default(),
            visual,
            media,
        })
    }

    /// Phase one: size the strip and place slide 0 without animation.
    /// Animation stays off until [`Self::arm_animation`].
    pub fn initialize(&mut self) {
        let count = self.registry.count();
        self.visual.set_track_width(count as f32 * 100.0);
        for index in 0..count {
            self.visual
                .set_slide_width(index, slide_width_percent(count));
        }

        self.apply(0, false);
        self.state.is_initialized = true;
        log::info!(
            "Carousel initialized with {} slides ({:?} captions)",
            count,
            self.captions.mode()
        );
    }

    /// Phase two: animate every transition from now on. Idempotent.
    pub fn arm_animation(&mut self) {
        if self.state.phase != AnimationPhase::Armed {
            log::debug!("Carousel animation armed");
            self.state.phase = AnimationPhase::Armed;
        }
    }

    /// Eagerly resolve every pending caption, then refresh the display.
    pub async fn resolve_captions<F>(&mut self, fetcher: &F)
    where
        F: CaptionFetcher + ?Sized,
    {
        self.captions.resolve_all(fetcher).await;
        self.show_caption(self.state.current_index);
    }

    /// Move to `index`, animating according to the current phase.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        self.go_to_with(index, None)
    }

    /// Move to `index`. `animate` overrides the phase when set.
    pub fn go_to_with(&mut self, index: usize, animate: Option<bool>) -> Result<()> {
        if !self.registry.contains(index) {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.registry.count(),
            });
        }
        let animate = animate.unwrap_or(self.state.is_animated());
        self.apply(index, animate);
        Ok(())
    }

    pub fn next(&mut self) {
        let index = self.registry.next_index(self.state.current_index);
        self.apply(index, self.state.is_animated());
    }

    pub fn previous(&mut self) {
        let index = self.registry.previous_index(self.state.current_index);
        self.apply(index, self.state.is_animated());
    }

    /// Dispatch one input. Failures are handled here and never reach the
    /// event source.
    pub fn update(&mut self, message: CarouselMessage) {
        match message {
            CarouselMessage::NextPressed => self.next(),
            CarouselMessage::PreviousPressed => self.previous(),
            CarouselMessage::IndicatorPressed(index) => {
                if let Err(err) = self.go_to(index) {
                    log::warn!("Ignoring indicator press: {}", err);
                }
            }
            CarouselMessage::DragStarted(x) => self.gesture.begin(x),
            CarouselMessage::DragMoved(x) => self.drag_moved(x),
            CarouselMessage::DragEnded(x) => self.drag_ended(x),
            CarouselMessage::DragCancelled => {
                if self.gesture.cancel() {
                    self.snap_back();
                }
            }
            CarouselMessage::MediaEnded(index) => self.media_ended(index),
            CarouselMessage::CaptionResolved { index, text } => {
                self.caption_resolved(index, text)
            }
            CarouselMessage::ArmAnimation => self.arm_animation(),
        }
    }

    /// Loop the active slide's media; completions from other slides are
    /// stale and ignored.
    pub fn media_ended(&mut self, index: usize) {
        if index != self.state.current_index {
            log::debug!(
                "Ignoring media end from inactive slide {} (active {})",
                index,
                self.state.current_index
            );
            return;
        }
        self.media.rewind(index);
        self.play(index);
    }

    /// Store a resolved caption and show it if its slide is active.
    pub fn caption_resolved(&mut self, index: usize, text: String) {
        if self.captions.record(index, text)
            && index == self.state.current_index
        {
            self.show_caption(index);
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn captions(&self) -> &CaptionProvider {
        &self.captions
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn visual_mut(&mut self) -> &mut V {
        &mut self.visual
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn into_bindings(self) -> (V, M) {
        (self.visual, self.media)
    }

    fn apply(&mut self, index: usize, animate: bool) {
        let count = self.registry.count();
        self.state.current_index = index;

        let motion = if animate {
            TrackMotion::Animated(self.config.transition)
        } else {
            TrackMotion::Instant
        };
        self.visual
            .set_track_offset(strip_offset_percent(index, count), motion);

        for i in 0..count {
            let active = i == index;
            self.visual.set_slide_active(i, active);
            self.visual.set_indicator_active(i, active);
        }

        self.sync_media(index);
        self.show_caption(index);

        log::debug!(
            "Carousel moved to slide {} of {} (animated: {})",
            index,
            count,
            animate
        );
    }

    fn sync_media(&mut self, active: usize) {
        for i in 0..self.registry.count() {
            if i == active {
                self.media.rewind(i);
                self.play(i);
            } else {
                self.media.pause(i);
                self.media.rewind(i);
            }
        }
    }

    fn play(&mut self, index: usize) {
        if let Err(rejected) = self.media.play(index) {
            log::warn!("Auto-play prevented: {}", rejected);
        }
    }

    fn show_caption(&mut self, index: usize) {
        match self.captions.get_caption(index) {
            Some(text) => self.visual.set_caption(text),
            // Unresolved: never leave the previous slide's text behind.
            None => self.visual.set_caption(
                self.config.caption_placeholder.as_deref().unwrap_or(""),
            ),
        }
    }

    fn drag_moved(&mut self, coordinate: f32) {
        let extent = self.visual.viewport_extent();
        if let Some(displacement) = self.gesture.update(coordinate, extent) {
            let resting = strip_offset_percent(
                self.state.current_index,
                self.registry.count(),
            );
            self.visual
                .set_track_offset(resting - displacement, TrackMotion::Instant);
        }
    }

    fn drag_ended(&mut self, coordinate: f32) {
        match self.gesture.end(coordinate) {
            Some(NavigationIntent::Next) => self.next(),
            Some(NavigationIntent::Previous) => self.previous(),
            Some(NavigationIntent::SnapBack) => self.snap_back(),
            None => {}
        }
    }

    /// Return the strip to the current slide's resting offset. Media and
    /// caption are untouched since the active slide did not change.
    fn snap_back(&mut self) {
        let offset = strip_offset_percent(
            self.state.current_index,
            self.registry.count(),
        );
        self.visual.set_track_offset(
            offset,
            TrackMotion::Animated(self.config.transition),
        );
    }
}
