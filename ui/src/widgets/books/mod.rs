//! Books table module.
//!
//! This module contains the books panel widget and its submodules:
//! - `api`: Catalog requests and the response channel
//! - `modals`: The edit dialog
//! - `panel`: Toolbar, table and pager
//! - `table`: Table rendering components (columns, header, row, cells)

mod api;
mod modals;
mod panel;
pub mod table;

pub use api::{
    FetchMessage, FetchReceiver, FetchSender, create_fetch_channel, dispatch, fetch_books,
    poll_fetch_results,
};
pub use modals::show_edit_book_modal;
pub use panel::{books_panel, export_books};
