//! Main panel of the books table: toolbar, table and pager.

use bookdash_business::{EXPORT_FILE_NAME, PAGE_SIZE_OPTIONS};
use egui::{Button, ComboBox, Response, RichText, ScrollArea, TextEdit, Ui};

use super::api::{dispatch, poll_fetch_results};
use super::modals::show_edit_book_modal;
use super::table::{TableAction, books_table};
use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

/// Displays the books panel.
///
/// Requests the first page on the first frame, then applies finished
/// requests at the start of every frame.
pub fn books_panel(state: &mut State, ui: &mut Ui) -> Response {
    poll_fetch_results(state);

    if !state.initial_fetch_started {
        state.initial_fetch_started = true;
        let ticket = state.table.begin_fetch();
        dispatch(state, &ticket, ui.ctx());
    }

    let response = ui.vertical(|ui| {
        toolbar(state, ui);
        messages(state, ui);

        ui.add_space(8.0);

        let action = ScrollArea::horizontal()
            .id_salt("books_table_scroll")
            .show(ui, |ui| {
                let rows = state.table.sorted_rows();
                books_table(ui, &rows, state.table.sort())
            })
            .inner;

        match action {
            Some(TableAction::Sort(column)) => {
                let ticket = state.table.request_sort(column);
                dispatch(state, &ticket, ui.ctx());
            }
            Some(TableAction::Edit(key)) => {
                state.table.open_edit(&key);
            }
            None => {}
        }

        ui.add_space(8.0);
        pager(state, ui);
    });

    show_edit_book_modal(&mut state.table, ui);

    response.response
}

fn toolbar(state: &mut State, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let search = ui.add(
            TextEdit::singleline(&mut state.search_input)
                .hint_text("Search books")
                .desired_width(240.0),
        );
        if search.changed()
            && let Some(ticket) = state.table.set_search(&state.search_input)
        {
            dispatch(state, &ticket, ui.ctx());
        }

        if ui.button("Download CSV").clicked() {
            export_books(state);
        }

        if state.table.is_fetching() {
            ui.spinner();
            ui.label("Loading books...");
        } else if let Some(at) = state.table.last_fetch() {
            ui.weak(format!("Updated {}", at.format("%H:%M:%S")));
        }
    });
}

fn messages(state: &mut State, ui: &mut Ui) {
    if let Some(error) = state.table.error() {
        ui.colored_label(COLOR_RED, format!("Error: {error}"));
    }

    if let Some(error) = &state.export_error {
        ui.colored_label(COLOR_RED, format!("Export failed: {error}"));
    }

    let mut dismiss = false;
    if let Some(notice) = state.table.notice() {
        ui.horizontal(|ui| {
            ui.colored_label(COLOR_AMBER, notice);
            dismiss = ui.small_button("Dismiss").clicked();
        });
    }
    if dismiss {
        state.table.dismiss_notice();
    }
}

fn pager(state: &mut State, ui: &mut Ui) {
    let total = state.table.total_count();
    let pagination = *state.table.pagination();
    let mut page_size = pagination.page_size();

    let (previous, next) = ui
        .horizontal(|ui| {
            ui.label("Rows per page:");
            ComboBox::from_id_salt("rows_per_page")
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for option in PAGE_SIZE_OPTIONS {
                        ui.selectable_value(&mut page_size, option, option.to_string());
                    }
                });

            ui.label(RichText::new(pagination.range_label(total)).monospace());

            let previous = ui
                .add_enabled(pagination.has_previous(), Button::new("‹ Prev"))
                .clicked();
            let next = ui
                .add_enabled(pagination.has_next(total), Button::new("Next ›"))
                .clicked();
            (previous, next)
        })
        .inner;

    let ticket = if page_size != pagination.page_size() {
        state.table.set_page_size(page_size).ok().flatten()
    } else if previous {
        state.table.previous_page()
    } else if next {
        state.table.next_page()
    } else {
        None
    };

    if let Some(ticket) = ticket {
        dispatch(state, &ticket, ui.ctx());
    }
}

/// Exports the loaded rows in display order through the state's CSV saver.
pub fn export_books(state: &mut State) {
    let result = state
        .table
        .export_csv()
        .and_then(|csv| state.csv_saver.save(EXPORT_FILE_NAME, &csv));

    match result {
        Ok(Some(location)) => {
            log::info!("Exported {} books to {location}", state.table.rows().len());
            state.export_error = None;
        }
        Ok(None) => {}
        Err(err) => {
            log::error!("CSV export failed: {err}");
            state.export_error = Some(err.to_string());
        }
    }
}
