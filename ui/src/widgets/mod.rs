pub mod books;

pub use books::{
    FetchMessage, FetchReceiver, FetchSender, books_panel, create_fetch_channel,
    poll_fetch_results,
};
