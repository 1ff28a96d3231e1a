//! Table components for the books panel.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use bookdash_business::{Book, BookColumn, SortState};
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_book_row;

/// Something the user clicked inside the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Sort(BookColumn),
    /// Edit the book with this key.
    Edit(String),
}

/// Renders `rows` in the given order.
pub fn books_table(ui: &mut Ui, rows: &[&Book], sort: &SortState) -> Option<TableAction> {
    let mut action = None;

    let builder = table_columns().into_iter().fold(
        TableBuilder::new(ui)
            .id_salt("books_table")
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center)),
        |builder, column| builder.column(column),
    );

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(column) = render_table_header(&mut header, sort) {
                action = Some(TableAction::Sort(column));
            }
        })
        .body(|mut body| {
            for book in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    if render_book_row(&mut row, book) {
                        action = Some(TableAction::Edit(book.key.clone()));
                    }
                });
            }
        });

    action
}
