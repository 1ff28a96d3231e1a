//! CSV export of the loaded rows.

use std::path::Path;

use crate::book::Book;
use crate::column::BookColumn;

/// File name offered when saving the export.
pub const EXPORT_FILE_NAME: &str = "books.csv";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders `books` as CSV with a header row followed by one row per book.
///
/// Absent fields become empty cells; author names are joined with `", "`.
pub fn books_to_csv<'a>(books: impl IntoIterator<Item = &'a Book>) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(BookColumn::ALL.iter().map(|column| column.label()))?;
    for book in books {
        writer.write_record(
            BookColumn::ALL
                .iter()
                .map(|column| book.field_text(*column).unwrap_or_default()),
        )?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes an export to `path`, replacing any existing file.
pub fn write_csv_file(path: &Path, csv: &str) -> Result<(), ExportError> {
    std::fs::write(path, csv)?;
    log::info!("Exported {} bytes of CSV to {}", csv.len(), path.display());
    Ok(())
}
