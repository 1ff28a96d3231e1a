//! Catalog access and table state for the book dashboard.

mod book;
mod catalog;
mod column;
mod config;
mod edit;
mod export;
mod fetch_service;
mod pagination;
mod sort;
mod table_state;

pub use book::{Author, Book, CatalogPage};
pub use catalog::{
    CatalogError, CatalogQuery, CatalogResult, DEFAULT_CATALOG_URL, decode_response, fetch_page,
};
pub use column::BookColumn;
pub use config::BusinessConfig;
pub use edit::{EditBuffer, EditModal, SaveOutcome};
pub use export::{EXPORT_FILE_NAME, ExportError, books_to_csv, write_csv_file};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
pub use pagination::{
    DEFAULT_PAGE_SIZE, InvalidPageSize, PAGE_SIZE_OPTIONS, PLACEHOLDER_TOTAL_COUNT, Pagination,
    is_allowed_page_size,
};
pub use sort::{SortDirection, SortState, compare_books};
pub use table_state::{BookTableState, FetchOutcome, FetchTicket, SAVE_DISCARDED_NOTICE};
