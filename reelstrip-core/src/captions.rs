//! Caption resolution.
//!
//! A provider runs in one of two modes, fixed at construction. Inline mode
//! copies each slide's literal caption and is complete immediately. Resource
//! mode starts empty and fills in as fetches complete; a failed fetch falls
//! back to the slide's name, so every resolution eventually yields text.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::fetch::CaptionFetcher;
use crate::registry::{CaptionSource, SlideRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionMode {
    Inline,
    Resource,
}

impl CaptionMode {
    fn label(self) -> &'static str {
        match self {
            CaptionMode::Inline => "inline",
            CaptionMode::Resource => "resource",
        }
    }
}

/// A caption that still has to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub index: usize,
    pub name: String,
}

/// Resolved captions by slide index. Entries are written once and never
/// replaced.
#[derive(Debug, Clone, Default)]
pub struct CaptionCache {
    entries: HashMap<usize, String>,
}

impl CaptionCache {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    /// Store `text` for `index` unless that index already resolved.
    /// Returns whether the entry was written.
    pub fn insert_once(&mut self, index: usize, text: String) -> bool {
        if self.entries.contains_key(&index) {
            return false;
        }
        self.entries.insert(index, text);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CaptionProvider {
    mode: CaptionMode,
    names: Vec<String>,
    cache: CaptionCache,
}

impl CaptionProvider {
    /// Bind to `registry`. Every slide's caption source has to agree with
    /// `mode`.
    pub fn new(
        mode: CaptionMode,
        registry: &SlideRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut names = Vec::with_capacity(registry.count());
        let mut cache = CaptionCache::default();

        for slide in registry.iter() {
            match (mode, slide.caption_source()) {
                (CaptionMode::Inline, CaptionSource::Text(text)) => {
                    cache.insert_once(slide.index(), text.clone());
                    names.push(text.clone());
                }
                (CaptionMode::Resource, CaptionSource::Name(name)) => {
                    names.push(name.clone());
                }
                (_, source) => {
                    return Err(ConfigurationError::CaptionSourceMismatch {
                        index: slide.index(),
                        expected: mode.label(),
                        found: source.kind(),
                    });
                }
            }
        }

        Ok(Self { mode, names, cache })
    }

    /// Pick the mode from the registry's first slide. Mixed sources are
    /// still rejected.
    pub fn for_registry(
        registry: &SlideRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mode = match registry.slide_at(0).map(|s| s.caption_source()) {
            Some(CaptionSource::Name(_)) => CaptionMode::Resource,
            _ => CaptionMode::Inline,
        };
        Self::new(mode, registry)
    }

    pub fn mode(&self) -> CaptionMode {
        self.mode
    }

    /// Resolved caption for `index`, or `None` while it is still pending.
    pub fn get_caption(&self, index: usize) -> Option<&str> {
        self.cache.get(index)
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.cache.get(index).is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.cache.len() == self.names.len()
    }

    /// Captions that still need a fetch, in slide order.
    pub fn pending(&self) -> Vec<CaptionRequest> {
        self.names
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_resolved(*index))
            .map(|(index, name)| CaptionRequest {
                index,
                name: name.clone(),
            })
            .collect()
    }

    /// Record a finished resolution. Out-of-range and already-resolved
    /// indices are ignored; returns whether the cache changed.
    pub fn record(&mut self, index: usize, text: String) -> bool {
        if index >= self.names.len() {
            log::warn!("Ignoring caption for unknown slide {}", index);
            return false;
        }
        self.cache.insert_once(index, text)
    }

    /// Resolve every pending caption one after another. Never fails: each
    /// failure is logged and replaced by the slide's name.
    pub async fn resolve_all<F>(&mut self, fetcher: &F)
    where
        F: CaptionFetcher + ?Sized,
    {
        for request in self.pending() {
            let text = resolve_caption(fetcher, &request.name).await;
            self.record(request.index, text);
        }
    }
}

/// Fetch and trim one caption, falling back to `name` on any error.
pub async fn resolve_caption<F>(fetcher: &F, name: &str) -> String
where
    F: CaptionFetcher + ?Sized,
{
    match fetcher.fetch(name).await {
        Ok(body) => body.trim().to_string(),
        Err(err) => {
            log::warn!("Could not load caption for {}: {}", name, err);
            name.to_string()
        }
    }
}
