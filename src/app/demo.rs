// TailView - app/demo.rs
//
// Synthetic event source (--demo): exercises the viewer without a file to
// tail. Each tick inserts a counter line at the top of the surface; at the
// reset threshold the surface is cleared and the counter starts over.
//
// Optionally mirrors each generated line, timestamped, to an append-only
// log file, handy for pointing a second viewer instance at real tail input.

use crate::core::surface::TextSurface;
use crate::util::constants::{DEMO_RESET_THRESHOLD, DEMO_TIMESTAMP_FORMAT};
use std::io::Write;
use std::path::PathBuf;

/// Poll callback state for the synthetic event generator.
#[derive(Debug)]
pub struct EventSource {
    events: u64,
    mirror: Option<PathBuf>,
    /// Set after the first failed mirror write; the mirror is disabled for
    /// the rest of the run rather than warning once per tick.
    mirror_failed: bool,
}

impl EventSource {
    pub fn new(mirror: Option<PathBuf>) -> Self {
        Self {
            events: 0,
            mirror,
            mirror_failed: false,
        }
    }

    /// Events generated since the last reset.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Reset the counter (File → Close).
    pub fn reset(&mut self) {
        self.events = 0;
    }

    /// One poll tick: insert a line, or clear at the threshold.
    pub fn tick(&mut self, surface: &mut TextSurface) {
        if self.events >= DEMO_RESET_THRESHOLD {
            tracing::debug!(threshold = DEMO_RESET_THRESHOLD, "Demo reset");
            surface.clear();
            self.events = 0;
            return;
        }

        let line = format!("new text {}\n", self.events);
        surface.insert(&line, 1, 0);

        if let (Some(path), false) = (self.mirror.as_ref(), self.mirror_failed) {
            let stamped = format!(
                "{} -INFO- new text {}",
                chrono::Local::now().format(DEMO_TIMESTAMP_FORMAT),
                self.events
            );
            if let Err(e) = append_line(path, &stamped) {
                tracing::warn!(
                    file = %path.display(),
                    error = %e,
                    "Mirror log write failed; mirroring disabled"
                );
                self.mirror_failed = true;
            }
        }

        self.events += 1;
    }
}

/// Append one line to `path`, creating the file if needed.
fn append_line(path: &std::path::Path, line: &str) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::highlight::{ColorClass, Highlighter};

    #[test]
    fn test_lines_are_inserted_at_the_top() {
        let mut surface = TextSurface::new();
        let mut source = EventSource::new(None);
        source.tick(&mut surface);
        source.tick(&mut surface);
        assert_eq!(surface.text(), "new text 1\nnew text 0\n");
    }

    #[test]
    fn test_twenty_first_tick_clears_the_surface() {
        let mut surface = TextSurface::new();
        let mut source = EventSource::new(None);
        for _ in 0..20 {
            source.tick(&mut surface);
        }
        assert!(surface.text().contains("new text 19"));

        source.tick(&mut surface);
        assert_eq!(surface.text(), "");
        assert_eq!(source.events(), 0);

        // The cycle restarts cleanly.
        source.tick(&mut surface);
        assert_eq!(surface.text(), "new text 0\n");
    }

    #[test]
    fn test_mirror_lines_carry_a_highlightable_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = dir.path().join("demo.log");

        let mut surface = TextSurface::new();
        let mut source = EventSource::new(Some(mirror.clone()));
        source.tick(&mut surface);
        source.tick(&mut surface);

        let written = std::fs::read_to_string(&mirror).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        // The stamp format is exactly what the default rule table colours.
        let h = Highlighter::with_default_rules(false).unwrap();
        let spans = h.scan(lines[0]);
        assert!(spans.iter().any(|s| s.color == ColorClass::Blue));
        assert!(spans.iter().any(|s| s.color == ColorClass::Green));
        assert!(lines[0].ends_with("new text 0"));
        assert!(lines[1].ends_with("new text 1"));
    }

    #[test]
    fn test_mirror_failure_disables_mirroring_but_keeps_generating() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be opened for append.
        let mut surface = TextSurface::new();
        let mut source = EventSource::new(Some(dir.path().to_path_buf()));
        source.tick(&mut surface);
        source.tick(&mut surface);
        assert_eq!(surface.text(), "new text 1\nnew text 0\n");
        assert_eq!(source.events(), 2);
    }
}
