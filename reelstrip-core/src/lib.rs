//! Core of the reelstrip video carousel.
//!
//! A carousel cycles through a fixed, ordered set of video slides. This
//! crate holds everything with real behaviour: the slide registry, caption
//! resolution (inline or fetched by name), drag gesture recognition and the
//! controller that applies transitions and keeps media playback in step
//! with the active slide. Rendering and playback are reached through the
//! [`VisualBinding`] and [`MediaBinding`] traits, so the whole carousel runs
//! headless.

pub mod binding;
pub mod captions;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod gesture;
pub mod messages;
pub mod registry;
pub mod runtime;
pub mod testing;

pub use binding::{MediaBinding, TrackMotion, VisualBinding};
pub use captions::{CaptionCache, CaptionMode, CaptionProvider, CaptionRequest};
pub use config::{CarouselConfig, Easing, TransitionStyle};
pub use controller::{AnimationPhase, CarouselController, CarouselState};
pub use error::{
    CaptionFetchError, CarouselError, ConfigurationError, PlaybackRejected,
    Result,
};
pub use fetch::{
    CaptionFetcher, FileCaptionFetcher, HttpCaptionFetcher,
    caption_fetcher_for,
};
pub use gesture::{DragSession, GestureRecognizer, NavigationIntent};
pub use messages::CarouselMessage;
pub use registry::{
    CaptionSource, MediaHandle, SlideDescriptor, SlideRegistry, SlideSpec,
};
pub use runtime::CarouselRuntime;
