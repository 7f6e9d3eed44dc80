// TailView - app/state.rs
//
// Application state: the surface, the active poll source, and the status
// line. Owned by the eframe::App implementation.

use crate::app::demo::EventSource;
use crate::app::tail::FileTailSource;
use crate::core::surface::TextSurface;
use std::path::{Path, PathBuf};

/// The state value threaded through the poll loop: one variant per viewer
/// mode. File-menu actions address whichever variant is active.
#[derive(Debug)]
pub enum PollSource {
    Tail(FileTailSource),
    Demo(EventSource),
}

impl PollSource {
    /// One poll tick against the surface.
    pub fn tick(&mut self, surface: &mut TextSurface) {
        match self {
            PollSource::Tail(t) => t.tick(surface),
            PollSource::Demo(d) => d.tick(surface),
        }
    }

    /// Path of the tracked file, if this source tracks one.
    pub fn tracked_path(&self) -> Option<&Path> {
        match self {
            PollSource::Tail(t) => t.path(),
            PollSource::Demo(_) => None,
        }
    }

    /// File → Open. The demo source has no file to open; the action is
    /// ignored there.
    pub fn attach(&mut self, path: PathBuf) {
        match self {
            PollSource::Tail(t) => t.attach(path),
            PollSource::Demo(_) => {
                tracing::debug!("Open ignored in demo mode");
            }
        }
    }

    /// File → Close: detach from the current source and reset its state.
    pub fn detach(&mut self) {
        match self {
            PollSource::Tail(t) => t.detach(),
            PollSource::Demo(d) => d.reset(),
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The read-only text surface.
    pub surface: TextSurface,

    /// Status message for the status bar.
    pub status_message: String,
}

impl AppState {
    pub fn new(surface: TextSurface) -> Self {
        Self {
            surface,
            status_message: "Ready.".to_string(),
        }
    }
}
