// TailView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Highlight rule table compilation (fatal on an invalid pattern)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use tailview::app;
pub use tailview::core;
pub use tailview::ui;
pub use tailview::util;

use crate::app::demo::EventSource;
use crate::app::state::{AppState, PollSource};
use crate::app::tail::FileTailSource;
use crate::core::highlight::Highlighter;
use crate::core::poll::PollLoop;
use crate::core::surface::TextSurface;
use clap::Parser;
use std::path::PathBuf;

/// TailView - display and follow the contents of a file.
///
/// Point TailView at a file to show its contents in a read-only window that
/// refreshes whenever the file changes, with log severity markers coloured.
#[derive(Parser, Debug)]
#[command(name = "TailView", version, about)]
struct Cli {
    /// File to track (optional; use File > Open later, or --demo).
    file: Option<PathBuf>,

    /// Refresh rate in ticks per second (0 refreshes once and stops).
    #[arg(short = 'r', long = "rate", default_value_t = util::constants::DEFAULT_RATE_HZ)]
    rate: f64,

    /// Case-insensitive highlight matching.
    #[arg(long = "ignore-case")]
    ignore_case: bool,

    /// Disable keyword highlighting.
    #[arg(long = "plain")]
    plain: bool,

    /// Generate synthetic events instead of tailing a file.
    #[arg(long = "demo")]
    demo: bool,

    /// Also append each demo line, timestamped, to this file (implies --demo).
    #[arg(long = "demo-log", value_name = "PATH")]
    demo_log: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "TailView starting"
    );

    // Clamp the refresh rate to its named bounds. Zero stays zero: that is
    // the documented refresh-once mode.
    let mut rate = cli.rate;
    if rate < 0.0 {
        tracing::warn!(rate, "Negative rate treated as 0 (refresh once)");
        rate = 0.0;
    } else if rate > util::constants::MAX_RATE_HZ {
        tracing::warn!(
            rate,
            max = util::constants::MAX_RATE_HZ,
            "Rate clamped to maximum"
        );
        rate = util::constants::MAX_RATE_HZ;
    }

    // Compile the highlight rule table. The rules are static, so a failure
    // here is a packaging defect: report and terminate.
    let surface = if cli.plain {
        TextSurface::new()
    } else {
        match Highlighter::with_default_rules(cli.ignore_case) {
            Ok(h) => TextSurface::with_highlighter(h),
            Err(e) => {
                tracing::error!(error = %e, "Invalid highlight rule table");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    };

    let demo = cli.demo || cli.demo_log.is_some();
    let source = if demo {
        if let Some(ref path) = cli.demo_log {
            tracing::info!(file = %path.display(), "Demo mode with mirror log");
        }
        PollSource::Demo(EventSource::new(cli.demo_log))
    } else {
        if cli.file.is_none() {
            tracing::info!("No file given; use File > Open to choose one");
        }
        PollSource::Tail(FileTailSource::new(cli.file))
    };

    let state = AppState::new(surface);
    let poll = PollLoop::start(rate, |surface, source: &mut PollSource| {
        source.tick(surface);
    }, source);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_NAME)
            .with_inner_size([
                util::constants::DEFAULT_WINDOW_WIDTH,
                util::constants::DEFAULT_WINDOW_HEIGHT,
            ])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::TailApp::new(state, poll)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch TailView GUI: {e}");
        std::process::exit(1);
    }
}
