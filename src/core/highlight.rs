// TailView - core/highlight.rs
//
// Keyword highlighting: a fixed table of (colour class, compiled regex)
// rules, scanned line-by-line over freshly appended text.
//
// The rule table is static configuration: compiled once at startup, immutable
// afterwards, never recompiled per scan. An invalid pattern is a fatal
// startup error surfaced through HighlightError.

use crate::util::error::HighlightError;
use regex::RegexBuilder;

/// ISO-like timestamp with microseconds, e.g. `2024-01-15 09:30:01.123456`.
const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{6}";

/// Literal severity markers.
const WARNING_MARKER: &str = "-WARNING-";
const ERROR_MARKER: &str = "-ERROR-";
const INFO_MARKER: &str = "-INFO-";

// =============================================================================
// Colour classes
// =============================================================================

/// Colour class assigned to a matched span.
///
/// The class is both the semantic tag and the literal rendering colour
/// (Blue renders blue): renaming a class changes its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Blue,
    Yellow,
    Red,
    Green,
}

impl ColorClass {
    /// Lower-case colour name, as used in rule definitions and error text.
    pub fn name(&self) -> &'static str {
        match self {
            ColorClass::Blue => "blue",
            ColorClass::Yellow => "yellow",
            ColorClass::Red => "red",
            ColorClass::Green => "green",
        }
    }
}

impl std::fmt::Display for ColorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Rules and spans
// =============================================================================

/// A single (colour class, compiled pattern) pair.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pub color: ColorClass,
    pub pattern: regex::Regex,
}

impl HighlightRule {
    /// Compile a rule. `ignore_case` is the process-wide case toggle;
    /// matching is case-sensitive unless it is set.
    pub fn new(color: ColorClass, pattern: &str, ignore_case: bool) -> Result<Self, HighlightError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| HighlightError::InvalidPattern {
                class: color.name(),
                pattern: pattern.to_string(),
                source: e,
            })?;
        Ok(Self {
            color,
            pattern: compiled,
        })
    }
}

/// One match reported by a scan: colour class plus position.
///
/// `line` is 1-based within the scanned block; `start`/`end` are 0-based byte
/// offsets within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub color: ColorClass,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

// =============================================================================
// Highlighter
// =============================================================================

/// Immutable rule table applied to appended text.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Vec<HighlightRule>,
}

impl Highlighter {
    pub fn new(rules: Vec<HighlightRule>) -> Self {
        Self { rules }
    }

    /// Build the default rule table:
    ///
    ///   - blue   → ISO-like timestamp
    ///   - yellow → `-WARNING-`
    ///   - red    → `-ERROR-`
    ///   - green  → `-INFO-`
    pub fn with_default_rules(ignore_case: bool) -> Result<Self, HighlightError> {
        Ok(Self::new(vec![
            HighlightRule::new(ColorClass::Blue, TIMESTAMP_PATTERN, ignore_case)?,
            HighlightRule::new(ColorClass::Yellow, WARNING_MARKER, ignore_case)?,
            HighlightRule::new(ColorClass::Red, ERROR_MARKER, ignore_case)?,
            HighlightRule::new(ColorClass::Green, INFO_MARKER, ignore_case)?,
        ]))
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Scan a block of text and return every rule match.
    ///
    /// Order: line-by-line, rules in table order within each line, matches
    /// left-to-right within each rule. All matches are returned: overlapping
    /// spans from different rules are NOT de-duplicated; whoever applies the
    /// spans resolves overlaps with last-applied-wins (see
    /// `TextSurface::color_segments`).
    pub fn scan(&self, text: &str) -> Vec<HighlightSpan> {
        let mut spans = Vec::new();
        for (idx, line) in text.split('\n').enumerate() {
            let line_number = idx + 1;
            for rule in &self.rules {
                for m in rule.pattern.find_iter(line) {
                    spans.push(HighlightSpan {
                        color: rule.color,
                        line: line_number,
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_highlighter() -> Highlighter {
        Highlighter::with_default_rules(false).expect("default rules compile")
    }

    #[test]
    fn test_timestamp_and_error_on_one_line() {
        let h = default_highlighter();
        let line = "2024-01-15 09:30:01.123456 -ERROR- snapshot failed";
        let spans = h.scan(line);

        let blue = spans
            .iter()
            .find(|s| s.color == ColorClass::Blue)
            .expect("timestamp span");
        assert_eq!((blue.line, blue.start, blue.end), (1, 0, 26));
        assert_eq!(&line[blue.start..blue.end], "2024-01-15 09:30:01.123456");

        let red = spans
            .iter()
            .find(|s| s.color == ColorClass::Red)
            .expect("error span");
        assert_eq!(&line[red.start..red.end], "-ERROR-");
    }

    #[test]
    fn test_all_four_default_rules_match() {
        let h = default_highlighter();
        let text = "2024-01-15 09:30:01.123456 start\n-WARNING- low disk\n-ERROR- died\n-INFO- recovered\n";
        let spans = h.scan(text);

        let colors: Vec<_> = spans.iter().map(|s| s.color).collect();
        assert!(colors.contains(&ColorClass::Blue));
        assert!(colors.contains(&ColorClass::Yellow));
        assert!(colors.contains(&ColorClass::Red));
        assert!(colors.contains(&ColorClass::Green));
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let h = default_highlighter();
        let spans = h.scan("plain line\n-INFO- second line");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].line, 2);
        assert_eq!(spans[0].start, 0);
    }

    #[test]
    fn test_multiple_matches_per_line_left_to_right() {
        let h = default_highlighter();
        let spans = h.scan("-INFO- a -INFO- b");
        assert_eq!(spans.len(), 2);
        assert!(spans[0].start < spans[1].start);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let h = default_highlighter();
        assert!(h.scan("-error- lower case").is_empty());

        let ci = Highlighter::with_default_rules(true).unwrap();
        let spans = ci.scan("-error- lower case");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].color, ColorClass::Red);
    }

    #[test]
    fn test_truncated_timestamp_does_not_match() {
        let h = default_highlighter();
        // Seconds precision only; the rule requires six fractional digits.
        assert!(h.scan("2024-01-15 09:30:01 -- started").is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = HighlightRule::new(ColorClass::Red, "[unclosed", false);
        assert!(matches!(
            result,
            Err(HighlightError::InvalidPattern { class: "red", .. })
        ));
    }
}
