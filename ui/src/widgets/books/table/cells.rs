//! Cell rendering functions for the books table.

use egui::{Label, RichText, Ui};

/// Renders a field value, truncated to the column width. Absent values stay blank.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: Option<&str>) {
    if let Some(text) = text {
        ui.add(Label::new(text).truncate());
    }
}

/// Renders a numeric field value in monospace.
#[inline]
pub fn render_number_cell(ui: &mut Ui, text: Option<&str>) {
    if let Some(text) = text {
        ui.label(RichText::new(text).monospace());
    }
}

/// Renders the edit button. Returns `true` if it was clicked.
#[inline]
pub fn render_edit_button(ui: &mut Ui) -> bool {
    ui.button("✏ Edit").on_hover_text("Edit book").clicked()
}
