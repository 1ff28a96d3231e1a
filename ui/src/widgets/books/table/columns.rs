//! Column definitions for the books table.

use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 30.0;
pub const NUMBER_WIDTH: f32 = 120.0;
pub const EDIT_WIDTH: f32 = 70.0;

/// Table column configuration for the books table.
///
/// One column per [`bookdash_business::BookColumn`] in display order, then
/// the edit action column which takes the remaining space.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(220.0).at_least(120.0).clip(true), // Title
        Column::initial(170.0).at_least(100.0).clip(true), // Author name
        Column::exact(NUMBER_WIDTH),                       // First publish year
        Column::initial(220.0).at_least(100.0).clip(true), // Subject
        Column::exact(NUMBER_WIDTH),                       // Ratings average
        Column::initial(130.0).at_least(90.0).clip(true),  // Author birth date
        Column::initial(180.0).at_least(100.0).clip(true), // Author top work
        Column::remainder().at_least(EDIT_WIDTH),          // Edit
    ]
}
