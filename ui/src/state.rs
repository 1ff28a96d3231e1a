use std::sync::Arc;

use bookdash_business::{
    BookTableState, BusinessConfig, EhttpFetcher, FetchService, Pagination,
};

use crate::utils::csv_saver::{CsvSaver, SystemCsvSaver};
use crate::widgets::{FetchReceiver, FetchSender, create_fetch_channel};

/// The main application state.
///
/// Note: We manually implement Default because the fetch channel and the
/// service handles don't implement Default.
pub struct State {
    pub config: BusinessConfig,
    /// Table view state.
    pub table: BookTableState,
    /// Text currently typed in the search box.
    pub search_input: String,
    /// Message of the last failed export, shown in the toolbar.
    pub export_error: Option<String>,
    /// Whether the first page has been requested.
    pub initial_fetch_started: bool,
    pub fetcher: Arc<dyn FetchService>,
    pub csv_saver: Box<dyn CsvSaver>,
    /// Sender handed to fetch callbacks.
    pub fetch_sender: FetchSender,
    /// Receiver drained at the start of every frame.
    pub fetch_receiver: FetchReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }

    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        // The configured size is validated when the config is built.
        let pagination = Pagination::with_page_size(config.default_page_size()).unwrap_or_default();
        let (fetch_sender, fetch_receiver) = create_fetch_channel();

        Self {
            config,
            table: BookTableState::new(pagination),
            search_input: String::new(),
            export_error: None,
            initial_fetch_started: false,
            fetcher,
            csv_saver: Box::new(SystemCsvSaver),
            fetch_sender,
            fetch_receiver,
        }
    }

    /// State pointing at a mock catalog served under `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(format!(
            "{base_url}/subjects/science_fiction.json"
        )))
    }

    pub fn with_csv_saver(mut self, saver: impl CsvSaver + 'static) -> Self {
        self.csv_saver = Box::new(saver);
        self
    }
}
