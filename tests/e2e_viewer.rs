// TailView - tests/e2e_viewer.rs
//
// End-to-end tests for the viewer pipeline: poll loop -> source callback ->
// surface mutation -> highlight spans.
//
// These tests exercise the real filesystem and real mtime-based change
// detection, with no mocks. Only the egui rendering layer is absent;
// everything below it runs exactly as in the application.

use tailview::app::demo::EventSource;
use tailview::app::state::PollSource;
use tailview::app::tail::FileTailSource;
use tailview::core::highlight::{ColorClass, Highlighter};
use tailview::core::poll::PollLoop;
use tailview::core::surface::TextSurface;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime};

// =============================================================================
// Helpers
// =============================================================================

/// A surface with the application's default rule table.
fn highlighted_surface() -> TextSurface {
    TextSurface::with_highlighter(Highlighter::with_default_rules(false).unwrap())
}

/// A poll loop wired the way `main` wires it: the callback ticks the source.
fn viewer_loop(rate: f64, source: PollSource) -> PollLoop<PollSource> {
    PollLoop::start(rate, |surface, source: &mut PollSource| {
        source.tick(surface);
    }, source)
}

/// Rewrite `path` until its mtime differs from `prev` (coarse-granularity
/// filesystems need more than one attempt).
fn rewrite_with_new_mtime(path: &Path, contents: &str, prev: SystemTime) {
    loop {
        fs::write(path, contents).unwrap();
        if fs::metadata(path).unwrap().modified().unwrap() != prev {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

// =============================================================================
// File tail E2E
// =============================================================================

/// "A" at tick 1, rewritten to "B" before tick 2: the view shows "A" then
/// exactly "B": replacement, never accumulation.
#[test]
fn e2e_tail_replaces_view_on_change() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.log");
    fs::write(&file, "A").unwrap();

    let mut surface = highlighted_surface();
    let mut poll = viewer_loop(0.0, PollSource::Tail(FileTailSource::new(Some(file.clone()))));

    poll.tick(&mut surface);
    assert_eq!(surface.text(), "A");

    let t1 = fs::metadata(&file).unwrap().modified().unwrap();
    rewrite_with_new_mtime(&file, "B", t1);

    poll.tick(&mut surface);
    assert_eq!(surface.text(), "B");
}

/// Deleting the tracked file between ticks leaves the previous view intact
/// and raises nothing.
#[test]
fn e2e_tail_survives_file_deletion() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.log");
    fs::write(&file, "still here").unwrap();

    let mut surface = highlighted_surface();
    let mut poll = viewer_loop(0.0, PollSource::Tail(FileTailSource::new(Some(file.clone()))));

    poll.tick(&mut surface);
    fs::remove_file(&file).unwrap();
    poll.tick(&mut surface);

    assert_eq!(surface.text(), "still here");
}

/// A tailed log line with a timestamp and an error marker comes out of the
/// pipeline with at least a blue span over the stamp and a red span over the
/// marker.
#[test]
fn e2e_tail_applies_highlight_spans() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.log");
    fs::write(
        &file,
        "2024-01-15 09:30:01.123456 -ERROR- snapshot failed\n",
    )
    .unwrap();

    let mut surface = highlighted_surface();
    let mut poll = viewer_loop(0.0, PollSource::Tail(FileTailSource::new(Some(file))));
    poll.tick(&mut surface);

    let text = surface.text().to_string();
    let blue = surface
        .spans()
        .iter()
        .find(|s| s.color == ColorClass::Blue)
        .expect("timestamp span");
    assert_eq!(&text[blue.start..blue.end], "2024-01-15 09:30:01.123456");

    let red = surface
        .spans()
        .iter()
        .find(|s| s.color == ColorClass::Red)
        .expect("error span");
    assert_eq!(&text[red.start..red.end], "-ERROR-");
}

// =============================================================================
// Demo source E2E
// =============================================================================

/// Single-shot loop driven by repeated manual ticks: the 21st tick hits the
/// reset threshold and clears the surface back to empty.
#[test]
fn e2e_demo_resets_on_twenty_first_tick() {
    let mut surface = TextSurface::new();
    let mut poll = viewer_loop(0.0, PollSource::Demo(EventSource::new(None)));

    for _ in 0..20 {
        poll.tick(&mut surface);
    }
    assert!(surface.text().starts_with("new text 19\n"));
    assert!(surface.text().ends_with("new text 0\n"));

    poll.tick(&mut surface);
    assert_eq!(surface.text(), "");
}

// =============================================================================
// Poll cadence E2E
// =============================================================================

/// rate = 2 with a counting callback: after ~1 second of pumping the counter
/// has advanced by 2, give or take one tick of scheduling jitter.
#[test]
fn e2e_rate_two_advances_counter_twice_per_second() {
    let mut surface = TextSurface::new();
    let mut poll = PollLoop::start(2.0, |_, count: &mut u32| *count += 1, 0u32);

    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(1_050) {
        poll.pump(Instant::now(), &mut surface);
        std::thread::sleep(Duration::from_millis(5));
    }

    let ticks = *poll.state();
    assert!(
        (1..=3).contains(&ticks),
        "expected 2 +/- 1 ticks, got {ticks}"
    );
}

/// rate = 0 through the real pump path: one invocation, then silence.
#[test]
fn e2e_zero_rate_refreshes_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("app.log");
    fs::write(&file, "once").unwrap();

    let mut surface = TextSurface::new();
    let mut poll = viewer_loop(0.0, PollSource::Tail(FileTailSource::new(Some(file.clone()))));

    assert_eq!(poll.pump(Instant::now(), &mut surface), None);
    assert_eq!(surface.text(), "once");

    // Later changes are never picked up: the loop has retired.
    let t1 = fs::metadata(&file).unwrap().modified().unwrap();
    rewrite_with_new_mtime(&file, "twice", t1);
    for _ in 0..3 {
        assert_eq!(poll.pump(Instant::now(), &mut surface), None);
    }
    assert_eq!(surface.text(), "once");
}
