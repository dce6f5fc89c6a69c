//! Ordered, immutable set of slides a carousel cycles through.

use crate::error::ConfigurationError;

/// Opaque reference to a playable media resource. The media binding decides
/// what the source string means (URL, path, element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaHandle {
    src: String,
}

impl MediaHandle {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

/// Where a slide's caption comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionSource {
    /// Literal caption text, shown as-is.
    Text(String),
    /// Name of an external text resource; also the fallback caption.
    Name(String),
}

impl CaptionSource {
    pub fn as_str(&self) -> &str {
        match self {
            CaptionSource::Text(text) => text,
            CaptionSource::Name(name) => name,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CaptionSource::Text(_) => "inline",
            CaptionSource::Name(_) => "resource",
        }
    }
}

/// Construction input for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSpec {
    pub media: MediaHandle,
    pub caption: CaptionSource,
}

impl SlideSpec {
    pub fn inline(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            media: MediaHandle::new(src),
            caption: CaptionSource::Text(caption.into()),
        }
    }

    pub fn named(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            media: MediaHandle::new(src),
            caption: CaptionSource::Name(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDescriptor {
    index: usize,
    media: MediaHandle,
    caption: CaptionSource,
}

impl SlideDescriptor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn media(&self) -> &MediaHandle {
        &self.media
    }

    pub fn caption_source(&self) -> &CaptionSource {
        &self.caption
    }
}

#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<SlideDescriptor>,
}

impl SlideRegistry {
    /// Build the registry, assigning contiguous indices in input order.
    ///
    /// An empty slide list is reported as [`ConfigurationError::NoSlides`]
    /// rather than asserted, so callers building from user configuration
    /// can surface it.
    pub fn new(
        specs: impl IntoIterator<Item = SlideSpec>,
    ) -> Result<Self, ConfigurationError> {
        let slides: Vec<SlideDescriptor> = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| SlideDescriptor {
                index,
                media: spec.media,
                caption: spec.caption,
            })
            .collect();

        if slides.is_empty() {
            return Err(ConfigurationError::NoSlides);
        }

        log::debug!("Slide registry built with {} slides", slides.len());
        Ok(Self { slides })
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_at(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.slides.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }

    /// Index after `index`, wrapping to the first slide.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.count()
    }

    /// Index before `index`, wrapping to the last slide.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.count() - 1) % self.count()
    }
}
