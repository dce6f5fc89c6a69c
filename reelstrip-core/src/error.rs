use thiserror::Error;

/// Problems with the shape of a carousel detected while it is being built.
/// These are fatal: no controller is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("a carousel needs at least one slide")]
    NoSlides,

    #[error("{indicators} indicators supplied for {slides} slides")]
    IndicatorMismatch { slides: usize, indicators: usize },

    #[error("{elements} slide elements bound for {slides} slides")]
    SlideElementMismatch { slides: usize, elements: usize },

    #[error("slide {index} has a {found} caption source but the carousel uses {expected} captions")]
    CaptionSourceMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidThreshold(f32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Slide index {index} out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Failure to load a caption resource. Never leaves the caption provider:
/// the slide's name is used in its place.
#[derive(Error, Debug)]
pub enum CaptionFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The environment refused a play request (for example an autoplay policy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("playback rejected for slide {index}: {reason}")]
pub struct PlaybackRejected {
    pub index: usize,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
