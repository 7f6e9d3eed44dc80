// TailView - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only surface), egui.

pub mod panels;
pub mod theme;
