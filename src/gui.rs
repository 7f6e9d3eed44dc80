// TailView - gui.rs
//
// Top-level eframe::App implementation: drives the poll loop on the UI
// thread each frame, renders the menu bar, status bar, and viewer panel.

use crate::app::state::{AppState, PollSource};
use crate::app::tail::TrackState;
use crate::core::poll::PollLoop;
use crate::ui;
use crate::util::constants::{APP_NAME, DIALOG_LOG_EXTENSIONS, DIALOG_TEXT_EXTENSIONS};
use std::path::PathBuf;
use std::time::Instant;

/// The TailView application.
pub struct TailApp {
    pub state: AppState,
    pub poll: PollLoop<PollSource>,
    /// Window title last sent to the viewport, to avoid re-sending per frame.
    applied_title: String,
}

impl TailApp {
    pub fn new(state: AppState, poll: PollLoop<PollSource>) -> Self {
        Self {
            state,
            poll,
            applied_title: String::new(),
        }
    }

    /// `TailView-{absolute path}` while a file is tracked, `TailView` otherwise.
    fn desired_title(&self) -> String {
        match self.poll.state().tracked_path() {
            Some(p) => {
                let abs = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                format!("{}-{}", APP_NAME, abs.display())
            }
            None => APP_NAME.to_string(),
        }
    }

    fn file_dialog() -> rfd::FileDialog {
        rfd::FileDialog::new()
            .add_filter("text files", DIALOG_TEXT_EXTENSIONS)
            .add_filter("log files", DIALOG_LOG_EXTENSIONS)
            .add_filter("all files", &["*"])
    }
}

impl eframe::App for TailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the poll loop. The callback runs right here on the UI
        // thread; the returned due instant schedules the next wake-up so
        // ticks fire without user input.
        let next_due = self.poll.pump(Instant::now(), &mut self.state.surface);
        if let Some(due) = next_due {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }

        // Keep the window title in sync with the tracked file.
        let title = self.desired_title();
        if title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.applied_title = title;
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open\u{2026}").clicked() {
                        if let Some(path) = Self::file_dialog().pick_file() {
                            self.state.status_message =
                                format!("Tracking '{}'.", path.display());
                            self.poll.state_mut().attach(path);
                        }
                        ui.close_menu();
                    }

                    let tracked: Option<PathBuf> = self
                        .poll
                        .state()
                        .tracked_path()
                        .map(|p| p.to_path_buf());
                    ui.add_enabled_ui(tracked.is_some(), |ui| {
                        if ui.button("Save as\u{2026}").clicked() {
                            if let (Some(src), Some(dest)) =
                                (tracked.as_ref(), Self::file_dialog().save_file())
                            {
                                match crate::app::tail::save_copy(src, &dest) {
                                    Ok(bytes) => {
                                        self.state.status_message = format!(
                                            "Saved {bytes} bytes to '{}'.",
                                            dest.display()
                                        );
                                    }
                                    Err(e) => {
                                        self.state.status_message = e.to_string();
                                    }
                                }
                            }
                            ui.close_menu();
                        }
                    });

                    if ui.button("Close").clicked() {
                        self.state.surface.clear();
                        self.poll.state_mut().detach();
                        self.state.status_message = "Closed.".to_string();
                        ui.close_menu();
                    }

                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let PollSource::Tail(tail) = self.poll.state() {
                    if matches!(tail.track_state(), TrackState::Tracking(_)) {
                        ui.label(
                            egui::RichText::new(" \u{25cf} TRACKING ")
                                .strong()
                                .color(ui::theme::TRACKING_BADGE),
                        );
                        ui.separator();
                    }
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let lines = self.state.surface.line_ranges().count();
                    if !self.state.surface.text().is_empty() {
                        ui.label(format!("{lines} lines"));
                    }
                });
            });
        });

        // Central panel: the text surface on its black background.
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::SURFACE_BG)
                    .inner_margin(ui::theme::SURFACE_PADDING),
            )
            .show(ctx, |ui| {
                ui::panels::viewer::render(ui, &mut self.state);
            });
    }
}
