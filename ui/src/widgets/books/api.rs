//! Catalog requests issued by the books panel.

use bookdash_business::{CatalogResult, FetchService, FetchTicket, fetch_page};
use chrono::Utc;

use crate::state::State;

/// `(generation, result)` of a finished catalog request.
pub type FetchMessage = (u64, CatalogResult);
pub type FetchSender = flume::Sender<FetchMessage>;
pub type FetchReceiver = flume::Receiver<FetchMessage>;

pub fn create_fetch_channel() -> (FetchSender, FetchReceiver) {
    flume::unbounded()
}

/// Starts the request described by `ticket`.
///
/// The result is sent over `sender` and a repaint is requested, so the next
/// frame picks it up through [`poll_fetch_results`].
pub fn fetch_books(
    fetcher: &dyn FetchService,
    catalog_url: &str,
    ticket: &FetchTicket,
    sender: FetchSender,
    ctx: egui::Context,
) {
    let generation = ticket.generation;
    fetch_page(fetcher, catalog_url, &ticket.query, move |result| {
        if sender.send((generation, result)).is_err() {
            log::debug!("Books panel is gone, dropping catalog response {generation}");
        }
        ctx.request_repaint();
    });
}

/// Starts `ticket` with the services held by `state`.
pub fn dispatch(state: &State, ticket: &FetchTicket, ctx: &egui::Context) {
    fetch_books(
        state.fetcher.as_ref(),
        state.config.catalog_url(),
        ticket,
        state.fetch_sender.clone(),
        ctx.clone(),
    );
}

/// Applies every finished request to the table state.
pub fn poll_fetch_results(state: &mut State) {
    while let Ok((generation, result)) = state.fetch_receiver.try_recv() {
        let outcome = state.table.apply_fetch_result(generation, result, Utc::now());
        log::debug!("Catalog response {generation}: {outcome:?}");
    }
}
