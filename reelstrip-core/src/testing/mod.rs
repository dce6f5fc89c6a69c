//! In-memory bindings and a scripted caption fetcher for headless tests.

mod stubs;

pub use stubs::{
    MediaCommand, RecordingMedia, RecordingVisual, StubCaptionFetcher,
    VisualCommand,
};
