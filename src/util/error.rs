// TailView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain.
//
// Note the deliberate omission: an unavailable tail target is NOT an error
// value anywhere in this crate. The tail source models it as its `Unknown`
// tracking state and the user only ever sees an unchanged view.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all TailView operations.
#[derive(Debug)]
pub enum TailViewError {
    /// Highlight rule table construction failed.
    Highlight(HighlightError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for TailViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlight(e) => write!(f, "Highlight error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TailViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Highlight(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Highlight errors
// ---------------------------------------------------------------------------

/// Errors related to the highlight rule table.
///
/// The rule set is static, so an invalid pattern is a startup defect:
/// `main` propagates it as a fatal error rather than limping on uncoloured.
#[derive(Debug)]
pub enum HighlightError {
    /// A regex pattern in the rule table failed to compile.
    InvalidPattern {
        class: &'static str,
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern {
                class,
                pattern,
                source,
            } => write!(
                f,
                "Rule '{class}': invalid pattern ('{pattern}'): {source}"
            ),
        }
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

impl From<HighlightError> for TailViewError {
    fn from(e: HighlightError) -> Self {
        Self::Highlight(e)
    }
}

/// Convenience type alias for TailView results.
pub type Result<T> = std::result::Result<T, TailViewError>;
