//! Shared color constants for the UI.

use egui::Color32;

/// Salmon color of the dashboard heading.
pub const COLOR_HEADING: Color32 = Color32::from_rgb(241, 128, 112);

/// Red color for fetch and export errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for notices that need the user's attention.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);
