//! Row rendering for the books table.

use bookdash_business::{Book, BookColumn};
use egui_extras::TableRow;

use super::cells::{render_edit_button, render_number_cell, render_text_cell};

/// Renders a single book row. Returns `true` if its edit button was clicked.
#[inline]
pub fn render_book_row(row: &mut TableRow<'_, '_>, book: &Book) -> bool {
    for column in BookColumn::ALL {
        let text = book.field_text(column);
        row.col(|ui| match column {
            BookColumn::FirstPublishYear | BookColumn::RatingsAverage => {
                render_number_cell(ui, text.as_deref());
            }
            _ => render_text_cell(ui, text.as_deref()),
        });
    }

    let mut edit_clicked = false;
    row.col(|ui| {
        edit_clicked = render_edit_button(ui);
    });
    edit_clicked
}
