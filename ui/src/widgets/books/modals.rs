//! Edit dialog for a single book.

use bookdash_business::{BookColumn, BookTableState};
use egui::{Grid, Key, Ui, Window};

/// What the user did with the edit dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalAction {
    Save,
    Close,
}

/// Shows the edit dialog while the modal is open.
///
/// Field edits go to the edit buffer only. Save and Close both close the
/// dialog; neither writes back to the table.
pub fn show_edit_book_modal(table: &mut BookTableState, ui: &mut Ui) {
    let Some(buffer) = table.edit_buffer_mut() else {
        return;
    };

    let mut open = true;
    let mut action = None;

    Window::new("Edit Book")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("edit_book_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for column in BookColumn::ALL {
                        ui.label(column.label());
                        ui.text_edit_singleline(buffer.field_mut(column));
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(ModalAction::Save);
                }
                if ui.button("Close").clicked() {
                    action = Some(ModalAction::Close);
                }
            });

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                action = Some(ModalAction::Close);
            }
        });

    if !open {
        action = Some(ModalAction::Close);
    }

    match action {
        Some(ModalAction::Save) => {
            table.save_edit();
        }
        Some(ModalAction::Close) => {
            table.close_edit();
        }
        None => {}
    }
}
