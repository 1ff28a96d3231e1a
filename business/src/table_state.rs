//! State of the book table view.
//!
//! Every user action that changes what the catalog should return hands back a
//! [`FetchTicket`]. The caller performs the request and reports the result with
//! [`BookTableState::apply_fetch_result`]; only the ticket issued last may
//! replace the rows, so a slow response can never overwrite a newer one.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::book::Book;
use crate::catalog::{CatalogError, CatalogQuery, CatalogResult};
use crate::column::BookColumn;
use crate::edit::{EditBuffer, EditModal, SaveOutcome};
use crate::export::{ExportError, books_to_csv};
use crate::pagination::{InvalidPageSize, PLACEHOLDER_TOTAL_COUNT, Pagination};
use crate::sort::SortState;

/// Notice shown after Save, which does not persist anything.
pub const SAVE_DISCARDED_NOTICE: &str = "Changes were not saved: editing is not supported yet.";

/// A catalog request the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: CatalogQuery,
}

/// What happened to a reported fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { rows: usize },
    Failed,
    /// A newer request was issued; the result was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct BookTableState {
    rows: Vec<Book>,
    work_count: Option<u64>,
    sort: SortState,
    pagination: Pagination,
    search: String,
    modal: EditModal,
    latest_generation: u64,
    is_fetching: bool,
    error: Option<CatalogError>,
    last_fetch: Option<DateTime<Utc>>,
    notice: Option<String>,
}

impl BookTableState {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Self::default()
        }
    }

    /// Rows of the current page in fetch order.
    pub fn rows(&self) -> &[Book] {
        &self.rows
    }

    /// Rows of the current page in display order.
    pub fn sorted_rows(&self) -> Vec<&Book> {
        self.sort.apply(&self.rows)
    }

    /// Total used by the pager.
    pub fn total_count(&self) -> u64 {
        self.work_count.unwrap_or(PLACEHOLDER_TOTAL_COUNT)
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn modal(&self) -> &EditModal {
        &self.modal
    }

    /// Issues a request for the current page, superseding any in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_generation += 1;
        self.is_fetching = true;
        FetchTicket {
            generation: self.latest_generation,
            query: CatalogQuery::new(&self.pagination, &self.search),
        }
    }

    /// Reports the result of the request issued with `generation`.
    ///
    /// On failure the previous rows stay in place and the error is kept for display.
    pub fn apply_fetch_result(
        &mut self,
        generation: u64,
        result: CatalogResult,
        now: DateTime<Utc>,
    ) -> FetchOutcome {
        if generation != self.latest_generation {
            debug!(
                "Dropping stale catalog response {generation}, latest is {}",
                self.latest_generation
            );
            return FetchOutcome::Stale;
        }

        self.is_fetching = false;

        match result {
            Ok(page) => {
                self.last_fetch = Some(now);
                self.rows = page.works;
                self.work_count = page.work_count;
                self.error = None;
                FetchOutcome::Applied {
                    rows: self.rows.len(),
                }
            }
            Err(err) => {
                warn!("Keeping {} previous rows after fetch error: {err}", self.rows.len());
                self.error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    /// Handles a header click.
    pub fn request_sort(&mut self, column: BookColumn) -> FetchTicket {
        self.sort.request(column);
        self.begin_fetch()
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket> {
        self.pagination.set_page(page).then(|| self.begin_fetch())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.pagination.has_next(self.total_count()) {
            return None;
        }
        self.set_page(self.pagination.page() + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        if !self.pagination.has_previous() {
            return None;
        }
        self.set_page(self.pagination.page() - 1)
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<Option<FetchTicket>, InvalidPageSize> {
        let changed = self.pagination.set_page_size(page_size)?;
        Ok(changed.then(|| self.begin_fetch()))
    }

    /// Changes the search text and returns to the first page.
    pub fn set_search(&mut self, search: &str) -> Option<FetchTicket> {
        if self.search == search {
            return None;
        }
        self.search = search.to_owned();
        self.pagination.reset_page();
        Some(self.begin_fetch())
    }

    /// Opens the edit modal on the row with `key`. Returns `false` if no such row is loaded.
    pub fn open_edit(&mut self, key: &str) -> bool {
        match self.rows.iter().find(|book| book.key == key) {
            Some(book) => {
                self.modal.open(book);
                true
            }
            None => false,
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        self.modal.buffer_mut()
    }

    /// Closes the modal through Save. The buffer is discarded and the rows are untouched.
    pub fn save_edit(&mut self) -> Option<SaveOutcome> {
        let outcome = self.modal.save()?;
        let SaveOutcome::Discarded(buffer) = &outcome;
        warn!("Edits to {} were discarded: saving is not supported", buffer.key());
        self.notice = Some(SAVE_DISCARDED_NOTICE.to_owned());
        Some(outcome)
    }

    pub fn close_edit(&mut self) -> bool {
        self.modal.close()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Current page as CSV, in display order.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        books_to_csv(self.sorted_rows())
    }
}
