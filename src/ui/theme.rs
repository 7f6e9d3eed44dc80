// TailView - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use crate::core::highlight::ColorClass;
use egui::Color32;

/// Rendering colour for a highlight class. The class name IS the colour
/// (blue renders blue), so this mapping only picks shades that stay readable
/// on the dark surface.
pub fn class_colour(class: ColorClass) -> Color32 {
    match class {
        ColorClass::Blue => Color32::from_rgb(96, 165, 250),   // Blue 400
        ColorClass::Yellow => Color32::from_rgb(250, 204, 21), // Yellow 400
        ColorClass::Red => Color32::from_rgb(239, 68, 68),     // Red 500
        ColorClass::Green => Color32::from_rgb(34, 197, 94),   // Green 500
    }
}

/// Surface colours: white text on black.
pub const SURFACE_BG: Color32 = Color32::BLACK;
pub const SURFACE_FG: Color32 = Color32::WHITE;

/// Tracking badge colour (status bar).
pub const TRACKING_BADGE: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Layout constants.
pub const SURFACE_FONT_SIZE: f32 = 14.0;
pub const SURFACE_PADDING: egui::Margin = egui::Margin::same(5);
