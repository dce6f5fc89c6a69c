//! Turning a manifest into the pieces a carousel is built from.

use std::sync::Arc;

use reelstrip_core::{
    CaptionFetcher, CaptionMode, CaptionProvider, CarouselConfig,
    CarouselController, MediaBinding, SlideRegistry, SlideSpec,
    VisualBinding, caption_fetcher_for,
};

use crate::loader::error::ConfigLoadError;
use crate::models::CarouselManifest;

/// Everything a host needs besides its own bindings.
#[derive(Debug)]
pub struct CarouselParts {
    pub container_id: String,
    pub registry: SlideRegistry,
    pub captions: CaptionProvider,
    pub config: CarouselConfig,
    /// Caption transport, present in resource mode only.
    pub fetcher: Option<Arc<dyn CaptionFetcher>>,
}

impl CarouselParts {
    /// Bind the parts to a host's visual and media bindings.
    pub fn into_controller<V, M>(
        self,
        visual: V,
        media: M,
    ) -> reelstrip_core::Result<(CarouselController<V, M>, Option<Arc<dyn CaptionFetcher>>)>
    where
        V: VisualBinding,
        M: MediaBinding,
    {
        let controller = CarouselController::new(
            self.registry,
            self.captions,
            visual,
            media,
            self.config,
        )?;
        Ok((controller, self.fetcher))
    }
}

impl CarouselManifest {
    pub fn caption_mode(&self) -> CaptionMode {
        if self.load_captions_from_file {
            CaptionMode::Resource
        } else {
            CaptionMode::Inline
        }
    }

    /// Validate the manifest and build the registry, caption provider and
    /// fetcher it describes.
    pub fn assemble(&self) -> Result<CarouselParts, ConfigLoadError> {
        self.tuning.validate()?;

        let mode = self.caption_mode();
        let specs: Vec<SlideSpec> = match mode {
            CaptionMode::Inline => self
                .videos
                .iter()
                .map(|video| SlideSpec::inline(&video.src, &video.caption))
                .collect(),
            CaptionMode::Resource => {
                if self.video_names.len() != self.videos.len() {
                    return Err(ConfigLoadError::NameCountMismatch {
                        videos: self.videos.len(),
                        names: self.video_names.len(),
                    });
                }
                self.videos
                    .iter()
                    .zip(&self.video_names)
                    .map(|(video, name)| SlideSpec::named(&video.src, name))
                    .collect()
            }
        };

        let registry = SlideRegistry::new(specs)?;
        let captions = CaptionProvider::new(mode, &registry)?;
        let fetcher: Option<Arc<dyn CaptionFetcher>> = match mode {
            CaptionMode::Inline => None,
            CaptionMode::Resource => Some(Arc::from(caption_fetcher_for(
                &self.caption_base,
                &self.caption_extension,
            ))),
        };

        tracing::debug!(
            container = %self.container_id,
            slides = registry.count(),
            mode = ?mode,
            "assembled carousel"
        );

        Ok(CarouselParts {
            container_id: self.container_id.clone(),
            registry,
            captions,
            config: self.tuning.clone(),
            fetcher,
        })
    }
}
