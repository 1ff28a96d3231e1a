//! Table header rendering for the books table.

use bookdash_business::{BookColumn, SortDirection, SortState};
use egui::{Button, RichText, Ui};
use egui_extras::TableRow;

/// Renders one clickable header per column and the edit column header.
///
/// Returns the column whose header was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: &SortState) -> Option<BookColumn> {
    let mut clicked = None;

    for column in BookColumn::ALL {
        header.col(|ui| {
            if render_header_cell(ui, column, sort) {
                clicked = Some(column);
            }
        });
    }
    header.col(|ui| {
        ui.strong("Actions");
    });

    clicked
}

/// Header text of `column`, with an arrow on the active header.
pub fn header_text(column: BookColumn, sort: &SortState) -> String {
    match (sort.active_header() == Some(column), sort.direction()) {
        (false, _) => column.header().to_owned(),
        (true, SortDirection::Ascending) => format!("{} ▲", column.header()),
        (true, SortDirection::Descending) => format!("{} ▼", column.header()),
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, column: BookColumn, sort: &SortState) -> bool {
    ui.add(Button::new(RichText::new(header_text(column, sort)).strong()).frame(false))
        .on_hover_text(format!("Sort by {}", column.header().to_lowercase()))
        .clicked()
}
