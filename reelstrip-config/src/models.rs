use reelstrip_core::fetch::{DEFAULT_CAPTION_BASE, DEFAULT_CAPTION_EXTENSION};
use reelstrip_core::CarouselConfig;
use serde::{Deserialize, Serialize};

fn default_caption_base() -> String {
    DEFAULT_CAPTION_BASE.to_string()
}

fn default_caption_extension() -> String {
    DEFAULT_CAPTION_EXTENSION.to_string()
}

/// One video slide as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoEntry {
    pub src: String,
    /// Inline caption. Ignored when captions are loaded from files.
    #[serde(default)]
    pub caption: String,
}

/// Page-level description of a carousel: which element it binds to, its
/// slides, where captions come from and how it behaves.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarouselManifest {
    /// Identifier of the container the visual binding attaches to.
    pub container_id: String,
    /// Slides in display order.
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    /// Fetch captions by name instead of using the inline text.
    #[serde(default)]
    pub load_captions_from_file: bool,
    /// Caption resource names, one per video, used when
    /// `load_captions_from_file` is set.
    #[serde(default)]
    pub video_names: Vec<String>,
    /// URL prefix or directory holding `<name>.<ext>` caption files.
    #[serde(default = "default_caption_base")]
    pub caption_base: String,
    #[serde(default = "default_caption_extension")]
    pub caption_extension: String,
    /// Gesture threshold, animation timing and placeholder text.
    #[serde(default)]
    pub tuning: CarouselConfig,
}

impl CarouselManifest {
    /// Inline-caption manifest with default tuning.
    pub fn inline(
        container_id: impl Into<String>,
        videos: Vec<VideoEntry>,
    ) -> Self {
        Self {
            container_id: container_id.into(),
            videos,
            load_captions_from_file: false,
            video_names: Vec::new(),
            caption_base: default_caption_base(),
            caption_extension: default_caption_extension(),
            tuning: CarouselConfig::default(),
        }
    }
}
