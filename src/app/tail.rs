// TailView - app/tail.rs
//
// File tail source: watches one file for modification-time changes and
// replaces the surface contents wholesale when it changes.
//
// All reads are synchronous on the UI thread; the whole-file re-read is
// O(file size) per change, accepted for human-scale logs (a reload above
// LARGE_SOURCE_WARN_BYTES logs a warning). An incremental tail keyed by a
// last-read byte offset would replace the re-read without changing the
// observable state machine.

use crate::core::surface::TextSurface;
use crate::util::constants::LARGE_SOURCE_WARN_BYTES;
use crate::util::error::{Result, TailViewError};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What the source currently knows about its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// No stat recorded; the next successful stat forces a reload.
    Unknown,
    /// Last observed modification time.
    Tracking(SystemTime),
}

/// Poll callback state for tailing a single file.
///
/// Per tick: stat the target; a failed stat (missing file, no file attached)
/// silently resets to `Unknown` and leaves the surface untouched; a changed
/// or first-seen mtime replaces the surface contents with the whole file.
#[derive(Debug)]
pub struct FileTailSource {
    path: Option<PathBuf>,
    track: TrackState,
}

impl FileTailSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            track: TrackState::Unknown,
        }
    }

    /// Start tracking `path` (File → Open). The next tick reloads from
    /// scratch.
    pub fn attach(&mut self, path: PathBuf) {
        tracing::info!(file = %path.display(), "Tracking file");
        self.path = Some(path);
        self.track = TrackState::Unknown;
    }

    /// Stop tracking (File → Close).
    pub fn detach(&mut self) {
        if let Some(ref path) = self.path {
            tracing::info!(file = %path.display(), "Detached from file");
        }
        self.path = None;
        self.track = TrackState::Unknown;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn track_state(&self) -> TrackState {
        self.track
    }

    /// One poll tick of the tracking state machine.
    pub fn tick(&mut self, surface: &mut TextSurface) {
        let Some(path) = self.path.as_deref() else {
            self.track = TrackState::Unknown;
            return;
        };

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                // Target missing: not an error to the user, only a reset so
                // the file is re-read in full if it reappears.
                tracing::debug!(file = %path.display(), error = %e, "Stat failed; tracking reset");
                self.track = TrackState::Unknown;
                return;
            }
        };
        let modified = match metadata.modified() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "No modification time; tracking reset");
                self.track = TrackState::Unknown;
                return;
            }
        };

        let changed = match self.track {
            TrackState::Unknown => true,
            TrackState::Tracking(prev) => prev != modified,
        };
        if !changed {
            return;
        }

        if metadata.len() > LARGE_SOURCE_WARN_BYTES {
            tracing::warn!(
                file = %path.display(),
                size = metadata.len(),
                "Reloading a large file in full; expect a pause"
            );
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                let contents = String::from_utf8_lossy(&bytes);
                surface.clear();
                surface.append(&contents);
                self.track = TrackState::Tracking(modified);
                tracing::debug!(
                    file = %path.display(),
                    bytes = bytes.len(),
                    "Reloaded changed file"
                );
            }
            Err(e) => {
                // Vanished between stat and read: same recovery as a failed
                // stat: keep the current view, re-read on reappearance.
                tracing::debug!(file = %path.display(), error = %e, "Read failed; tracking reset");
                self.track = TrackState::Unknown;
            }
        }
    }
}

/// Copy the tracked file's bytes to `dest` (File → Save as).
///
/// Bytes only; metadata is not preserved, and the viewer never promised it.
pub fn save_copy(src: &Path, dest: &Path) -> Result<u64> {
    std::fs::copy(src, dest).map_err(|e| TailViewError::Io {
        path: dest.to_path_buf(),
        operation: "save copy",
        source: e,
    })
}
