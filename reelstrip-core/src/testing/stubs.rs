use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::binding::{MediaBinding, TrackMotion, VisualBinding};
use crate::error::{CaptionFetchError, PlaybackRejected};
use crate::fetch::CaptionFetcher;

#[derive(Debug, Clone, PartialEq)]
pub enum VisualCommand {
    TrackWidth(f32),
    SlideWidth(usize, f32),
    TrackOffset(f32, TrackMotion),
    SlideActive(usize, bool),
    IndicatorActive(usize, bool),
    Caption(String),
}

/// Visual binding that keeps the latest element state plus a command log.
#[derive(Debug, Clone)]
pub struct RecordingVisual {
    slides: usize,
    indicators: usize,
    viewport_extent: f32,
    active_slides: Vec<bool>,
    active_indicators: Vec<bool>,
    track_offset: Option<(f32, TrackMotion)>,
    caption: Option<String>,
    commands: Vec<VisualCommand>,
}

impl RecordingVisual {
    pub fn new(slides: usize) -> Self {
        Self::with_indicators(slides, slides)
    }

    pub fn with_indicators(slides: usize, indicators: usize) -> Self {
        Self {
            slides,
            indicators,
            viewport_extent: 1000.0,
            active_slides: vec![false; slides],
            active_indicators: vec![false; indicators],
            track_offset: None,
            caption: None,
            commands: Vec::new(),
        }
    }

    pub fn viewport(mut self, extent: f32) -> Self {
        self.viewport_extent = extent;
        self
    }

    pub fn active_slides(&self) -> Vec<usize> {
        Self::marked(&self.active_slides)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        Self::marked(&self.active_indicators)
    }

    pub fn track_offset(&self) -> Option<(f32, TrackMotion)> {
        self.track_offset
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn commands(&self) -> &[VisualCommand] {
        &self.commands
    }

    /// Strip moves in order, as `(offset, animated)`.
    pub fn track_moves(&self) -> Vec<(f32, bool)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                VisualCommand::TrackOffset(offset, motion) => {
                    Some((*offset, motion.is_animated()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn marked(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(index, _)| index)
            .collect()
    }
}

impl VisualBinding for RecordingVisual {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn indicator_count(&self) -> usize {
        self.indicators
    }

    fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    fn set_track_width(&mut self, percent: f32) {
        self.commands.push(VisualCommand::TrackWidth(percent));
    }

    fn set_slide_width(&mut self, index: usize, percent: f32) {
        self.commands.push(VisualCommand::SlideWidth(index, percent));
    }

    fn set_track_offset(&mut self, percent: f32, motion: TrackMotion) {
        self.track_offset = Some((percent, motion));
        self.commands.push(VisualCommand::TrackOffset(percent, motion));
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active_slides.get_mut(index) {
            *flag = active;
        }
        self.commands.push(VisualCommand::SlideActive(index, active));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active_indicators.get_mut(index) {
            *flag = active;
        }
        self.commands
            .push(VisualCommand::IndicatorActive(index, active));
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = Some(text.to_string());
        self.commands.push(VisualCommand::Caption(text.to_string()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play(usize),
    Pause(usize),
    Rewind(usize),
}

/// Media binding that records commands and tracks which slides play.
#[derive(Debug, Clone, Default)]
pub struct RecordingMedia {
    playing: HashSet<usize>,
    reject_play: bool,
    commands: Vec<MediaCommand>,
}

impl RecordingMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every play request, like a browser blocking autoplay.
    pub fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.playing.contains(&index)
    }

    pub fn playing(&self) -> Vec<usize> {
        let mut playing: Vec<usize> = self.playing.iter().copied().collect();
        playing.sort_unstable();
        playing
    }

    pub fn commands(&self) -> &[MediaCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl MediaBinding for RecordingMedia {
    fn play(&mut self, index: usize) -> Result<(), PlaybackRejected> {
        self.commands.push(MediaCommand::Play(index));
        if self.reject_play {
            return Err(PlaybackRejected {
                index,
                reason: "autoplay disabled".into(),
            });
        }
        self.playing.insert(index);
        Ok(())
    }

    fn pause(&mut self, index: usize) {
        self.playing.remove(&index);
        self.commands.push(MediaCommand::Pause(index));
    }

    fn rewind(&mut self, index: usize) {
        self.commands.push(MediaCommand::Rewind(index));
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Body(String),
    Status(u16),
    Hang,
}

/// Caption fetcher answering from a script. Unscripted names fail with a
/// network error.
#[derive(Debug, Clone, Default)]
pub struct StubCaptionFetcher {
    script: HashMap<String, Scripted>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubCaptionFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caption(mut self, name: &str, body: &str) -> Self {
        self.script
            .insert(name.to_string(), Scripted::Body(body.to_string()));
        self
    }

    pub fn with_status(mut self, name: &str, status: u16) -> Self {
        self.script.insert(name.to_string(), Scripted::Status(status));
        self
    }

    /// Never complete the fetch for `name`.
    pub fn with_hang(mut self, name: &str) -> Self {
        self.script.insert(name.to_string(), Scripted::Hang);
        self
    }

    /// Names requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CaptionFetcher for StubCaptionFetcher {
    async fn fetch(&self, name: &str) -> Result<String, CaptionFetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(name.to_string());
        }

        match self.script.get(name) {
            Some(Scripted::Body(body)) => Ok(body.clone()),
            Some(Scripted::Status(status)) => Err(CaptionFetchError::Status {
                status: *status,
                url: format!("stub://{name}"),
            }),
            Some(Scripted::Hang) => futures::future::pending().await,
            None => Err(CaptionFetchError::Network(format!(
                "no scripted caption for {name}"
            ))),
        }
    }
}
