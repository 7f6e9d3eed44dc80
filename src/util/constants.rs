// TailView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TailView";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Poll loop
// =============================================================================

/// Default refresh rate in ticks per second.
pub const DEFAULT_RATE_HZ: f64 = 1.0;

/// Upper bound on the user-configurable refresh rate. One tick per frame is
/// the most the UI can usefully display; anything above this only burns CPU
/// re-reading an unchanged file.
pub const MAX_RATE_HZ: f64 = 60.0;

// =============================================================================
// File tailing
// =============================================================================

/// Size above which a reload logs a warning. The tail source re-reads the
/// whole file on every change, which is O(file size) per tick: fine for
/// human-scale logs, painful for anything bigger.
pub const LARGE_SOURCE_WARN_BYTES: u64 = 8 * 1024 * 1024; // 8 MiB

// =============================================================================
// Demo event source
// =============================================================================

/// Number of generated events after which the demo source clears the surface
/// and starts its counter over.
pub const DEMO_RESET_THRESHOLD: u64 = 20;

/// Timestamp format for demo mirror-log lines. Deliberately the exact shape
/// the blue highlight rule matches, so a second viewer tailing the mirror
/// file colours the stamps.
pub const DEMO_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

// =============================================================================
// Window defaults
// =============================================================================

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

/// Minimum window size in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

// =============================================================================
// File dialog filters
// =============================================================================

/// Extension filters offered by the Open and Save As dialogs.
pub const DIALOG_TEXT_EXTENSIONS: &[&str] = &["txt"];
pub const DIALOG_LOG_EXTENSIONS: &[&str] = &["log"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
