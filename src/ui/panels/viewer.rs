// TailView - ui/panels/viewer.rs
//
// The text surface panel: renders the buffer line-by-line as monospace
// layout jobs with the applied highlight colours, inside a two-axis scroll
// area (no wrapping; long lines scroll sideways), and honours the scroll
// request recorded by the last mutation.

use crate::app::state::AppState;
use crate::core::surface::ScrollRequest;
use crate::ui::theme;
use egui::text::LayoutJob;
use egui::TextFormat;

/// Render the viewer panel (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let scroll = state.surface.take_scroll_request();

    let mut area = egui::ScrollArea::both().auto_shrink([false; 2]);
    if scroll == ScrollRequest::Top {
        area = area.vertical_scroll_offset(0.0);
    }

    area.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 0.0;

        let text = state.surface.text();
        for range in state.surface.line_ranges() {
            let mut job = LayoutJob::default();
            job.wrap.max_width = f32::INFINITY;
            for (class, seg) in state.surface.color_segments(range) {
                job.append(
                    &text[seg],
                    0.0,
                    TextFormat {
                        font_id: egui::FontId::monospace(theme::SURFACE_FONT_SIZE),
                        color: class.map(theme::class_colour).unwrap_or(theme::SURFACE_FG),
                        ..Default::default()
                    },
                );
            }
            if job.sections.is_empty() {
                // Empty line: keep the row height consistent.
                job.append(
                    "",
                    0.0,
                    TextFormat {
                        font_id: egui::FontId::monospace(theme::SURFACE_FONT_SIZE),
                        color: theme::SURFACE_FG,
                        ..Default::default()
                    },
                );
            }
            ui.label(job);
        }

        if scroll == ScrollRequest::Bottom {
            ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
        }
    });
}
