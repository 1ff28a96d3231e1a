//! Hands exported CSV to the user.
//!
//! This module provides a trait-based abstraction over the save step, so tests
//! can capture exports without opening system dialogs.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: a save dialog via the `rfd` crate, then the file is written.
//! - **Web (WASM)**: a browser download of the CSV is started.

use std::sync::{Arc, Mutex};

use bookdash_business::ExportError;

/// Trait for saving an export, enabling mock implementations for testing.
pub trait CsvSaver {
    /// Saves `csv` under the suggested `file_name`.
    ///
    /// Returns where the export went, or `None` when the user cancelled.
    fn save(&self, file_name: &str, csv: &str) -> Result<Option<String>, ExportError>;
}

/// Default saver for the current platform.
#[derive(Debug, Default)]
pub struct SystemCsvSaver;

#[cfg(not(target_arch = "wasm32"))]
impl CsvSaver for SystemCsvSaver {
    fn save(&self, file_name: &str, csv: &str) -> Result<Option<String>, ExportError> {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(file_name)
            .set_title("Save books as CSV")
            .save_file()
        else {
            log::info!("CSV export cancelled");
            return Ok(None);
        };

        bookdash_business::write_csv_file(&path, csv)?;
        Ok(Some(path.display().to_string()))
    }
}

/// Delay before the download URL is released, so the browser can start reading it.
#[cfg(target_arch = "wasm32")]
const REVOKE_URL_DELAY_MS: i32 = 1_000;

#[cfg(target_arch = "wasm32")]
impl CsvSaver for SystemCsvSaver {
    fn save(&self, file_name: &str, csv: &str) -> Result<Option<String>, ExportError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast as _, JsValue};
        use web_sys::js_sys::Array;

        let js_error = |err: JsValue| ExportError::Io(std::io::Error::other(format!("{err:?}")));
        let no_document = || ExportError::Io(std::io::Error::other("no document to download into"));

        let window = web_sys::window().ok_or_else(no_document)?;
        let document = window.document().ok_or_else(no_document)?;

        let parts = Array::of1(&JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob =
            web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|element| js_error(element.into()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        let revoke = Closure::once_into_js(move || {
            if let Err(err) = web_sys::Url::revoke_object_url(&url) {
                log::warn!("Failed to release CSV download URL: {err:?}");
            }
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revoke.unchecked_ref(),
                REVOKE_URL_DELAY_MS,
            )
            .map_err(js_error)?;

        log::info!("Started browser download of {file_name} ({} bytes)", csv.len());
        Ok(Some(file_name.to_owned()))
    }
}

/// Keeps every export in memory instead of showing a dialog.
///
/// Clones share the same storage, so a test can keep one handle and give the
/// other to the app.
#[derive(Debug, Clone, Default)]
pub struct MemoryCsvSaver {
    saved: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCsvSaver {
    /// `(file_name, csv)` of every save, oldest first.
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl CsvSaver for MemoryCsvSaver {
    fn save(&self, file_name: &str, csv: &str) -> Result<Option<String>, ExportError> {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push((file_name.to_owned(), csv.to_owned()));
        }
        Ok(Some(format!("memory:{file_name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Saver whose user always cancels the dialog.
    struct CancellingSaver;

    impl CsvSaver for CancellingSaver {
        fn save(&self, _file_name: &str, _csv: &str) -> Result<Option<String>, ExportError> {
            Ok(None)
        }
    }

    #[test]
    fn test_memory_saver_shares_storage_between_clones() {
        let saver = MemoryCsvSaver::default();
        let handle = saver.clone();

        let location = saver
            .save("books.csv", "Title\n")
            .expect("memory save cannot fail");

        assert_eq!(location.as_deref(), Some("memory:books.csv"));
        assert_eq!(
            handle.saved(),
            [("books.csv".to_owned(), "Title\n".to_owned())]
        );
    }

    #[test]
    fn test_csv_saver_trait_is_object_safe() {
        let saver: Box<dyn CsvSaver> = Box::new(CancellingSaver);
        assert!(matches!(saver.save("books.csv", ""), Ok(None)));
    }
}
