// TailView - core/surface.rs
//
// The text surface: the scrollable, read-only display area presenting
// current content to the user. Owns the text buffer and the colour tags
// applied to it; mutation happens only through insert/append/clear, each of
// which holds a scoped write guard for the duration of the edit.
//
// Pure logic; rendering lives in ui/panels/viewer.rs.

use crate::core::highlight::{ColorClass, Highlighter};
use std::ops::Range;

// =============================================================================
// Public types
// =============================================================================

/// Scroll position requested by the most recent mutation, consumed by the
/// renderer on the next frame. Insert scrolls to the top, append to the
/// bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollRequest {
    #[default]
    None,
    Top,
    Bottom,
}

/// A colour tag applied to the buffer, held as an absolute byte range.
///
/// Ranges are byte offsets into `TextSurface::text()` so that insertions
/// before a tag shift it the way a toolkit text widget keeps tags anchored
/// to their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSpan {
    pub color: ColorClass,
    pub start: usize,
    pub end: usize,
}

// =============================================================================
// TextSurface
// =============================================================================

/// Read-only text area contents plus applied highlight spans.
///
/// Invariant: outside of a mutation call the surface is non-writable
/// (`is_writable()` is false). The write guard restores the flag on drop, so
/// no code path (early return included) can leave the surface open.
#[derive(Debug)]
pub struct TextSurface {
    content: String,
    spans: Vec<AppliedSpan>,
    highlighter: Option<Highlighter>,
    writable: bool,
    scroll: ScrollRequest,
}

/// Scoped write access. Dropping the guard restores the read-only state.
struct WriteGuard<'a> {
    surface: &'a mut TextSurface,
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.surface.writable = false;
    }
}

impl TextSurface {
    /// An undecorated surface (the `--plain` variant).
    pub fn new() -> Self {
        Self {
            content: String::new(),
            spans: Vec::new(),
            highlighter: None,
            writable: false,
            scroll: ScrollRequest::None,
        }
    }

    /// A surface that decorates appended text with the given rule table.
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            highlighter: Some(highlighter),
            ..Self::new()
        }
    }

    fn writer(&mut self) -> WriteGuard<'_> {
        self.writable = true;
        WriteGuard { surface: self }
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Place `text` at a 1-based `line` / 0-based byte `column` position.
    ///
    /// Out-of-range positions clamp to the nearest valid location (past the
    /// last line clamps to the end of the buffer, past a line's end to the end
    /// of that line): silent toolkit-style clamping, never an error.
    /// Existing spans at or after the insertion point shift with the text;
    /// a span the insertion lands strictly inside of widens.
    ///
    /// Requests scroll-to-top.
    pub fn insert(&mut self, text: &str, line: usize, column: usize) {
        let at = self.offset_of(line, column);
        let w = self.writer();
        w.surface.content.insert_str(at, text);
        let n = text.len();
        for span in w.surface.spans.iter_mut() {
            if span.start >= at {
                span.start += n;
                span.end += n;
            } else if span.end > at {
                span.end += n;
            }
        }
        w.surface.scroll = ScrollRequest::Top;
    }

    /// Insert `text` at the logical end.
    ///
    /// When a highlighter is attached, only the newly appended block is
    /// scanned, never the whole buffer, and the resulting spans are applied
    /// at their absolute positions. A keyword split across the append
    /// boundary is not matched.
    ///
    /// Requests scroll-to-bottom.
    pub fn append(&mut self, text: &str) {
        let found = match &self.highlighter {
            Some(h) => h.scan(text),
            None => Vec::new(),
        };
        let w = self.writer();
        let base = w.surface.content.len();
        w.surface.content.push_str(text);
        for span in found {
            let line_off = line_byte_offset(text, span.line);
            w.surface.spans.push(AppliedSpan {
                color: span.color,
                start: base + line_off + span.start,
                end: base + line_off + span.end,
            });
        }
        w.surface.scroll = ScrollRequest::Bottom;
    }

    /// Remove all content and spans unconditionally.
    pub fn clear(&mut self) {
        let w = self.writer();
        w.surface.content.clear();
        w.surface.spans.clear();
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn spans(&self) -> &[AppliedSpan] {
        &self.spans
    }

    /// True only while a mutation call is in progress.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Take the pending scroll request, resetting it to `None`.
    pub fn take_scroll_request(&mut self) -> ScrollRequest {
        std::mem::take(&mut self.scroll)
    }

    /// Byte ranges of the buffer's lines, in order. The terminator is not
    /// included in a line's range; a trailing newline yields a final empty
    /// line, as a text widget displays it.
    pub fn line_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let mut start = 0;
        self.content.split('\n').map(move |line| {
            let r = start..start + line.len();
            start = r.end + 1;
            r
        })
    }

    /// Break `range` into maximal segments of uniform colour.
    ///
    /// Overlap tie-break: the LAST span applied that covers a segment supplies
    /// its colour (toolkit tag stacking, made explicit). `None` means the
    /// default foreground.
    pub fn color_segments(&self, range: Range<usize>) -> Vec<(Option<ColorClass>, Range<usize>)> {
        let mut cuts = vec![range.start, range.end];
        for s in &self.spans {
            if s.end > range.start && s.start < range.end {
                cuts.push(s.start.clamp(range.start, range.end));
                cuts.push(s.end.clamp(range.start, range.end));
            }
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut segments = Vec::new();
        for pair in cuts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                continue;
            }
            let color = self
                .spans
                .iter()
                .rev()
                .find(|s| s.start <= a && s.end >= b)
                .map(|s| s.color);
            segments.push((color, a..b));
        }
        segments
    }

    // -------------------------------------------------------------------------
    // Position math
    // -------------------------------------------------------------------------

    /// Byte offset of a 1-based line / 0-based byte column, clamped to the
    /// nearest valid position and rounded down to a char boundary.
    fn offset_of(&self, line: usize, column: usize) -> usize {
        let line = line.max(1);
        let mut line_start = 0;
        let mut current = 1;
        while current < line {
            match self.content[line_start..].find('\n') {
                Some(nl) => {
                    line_start += nl + 1;
                    current += 1;
                }
                None => return self.content.len(),
            }
        }
        let line_end = self.content[line_start..]
            .find('\n')
            .map(|nl| line_start + nl)
            .unwrap_or(self.content.len());
        let mut at = (line_start + column).min(line_end);
        while !self.content.is_char_boundary(at) {
            at -= 1;
        }
        at
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the start of the 1-based `line` within `text`.
fn line_byte_offset(text: &str, line: usize) -> usize {
    let mut offset = 0;
    for _ in 1..line {
        match text[offset..].find('\n') {
            Some(nl) => offset += nl + 1,
            None => return text.len(),
        }
    }
    offset
}
