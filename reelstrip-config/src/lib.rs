//! Carousel manifest loading for reelstrip.
//!
//! A manifest names the container a carousel binds to, lists its videos,
//! selects inline or file-backed captions and carries the carousel tuning.
//! It can come from a file, an inline environment variable or a default
//! file next to the page, and is assembled into the core's construction
//! inputs here.

pub mod assemble;
pub mod loader;
pub mod models;

pub use assemble::CarouselParts;
pub use loader::{ManifestSource, error::ConfigLoadError};
pub use models::{CarouselManifest, VideoEntry};
