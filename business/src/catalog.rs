//! Client for the Open Library subject endpoint.

use log::{error, info};

use crate::book::CatalogPage;
use crate::fetch_service::FetchService;
use crate::pagination::Pagination;

pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org/subjects/science_fiction.json";

/// Parameters of one catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub limit: usize,
    pub offset: usize,
    /// Free-text filter, sent verbatim as `q` (empty means unfiltered).
    pub search: String,
}

impl CatalogQuery {
    pub fn new(pagination: &Pagination, search: &str) -> Self {
        Self {
            limit: pagination.page_size(),
            offset: pagination.offset(),
            search: search.to_owned(),
        }
    }

    /// Full request URL against `catalog_url`, which may already carry a query string.
    pub fn url(&self, catalog_url: &str) -> String {
        let separator = if catalog_url.contains('?') { '&' } else { '?' };
        format!(
            "{catalog_url}{separator}limit={}&offset={}&q={}",
            self.limit,
            self.offset,
            urlencoding::encode(&self.search)
        )
    }

    pub fn request(&self, catalog_url: &str) -> ehttp::Request {
        ehttp::Request::get(self.url(catalog_url))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("catalog returned status {0}")]
    Status(u16),
    #[error("could not read catalog response: {0}")]
    Decode(String),
}

pub type CatalogResult = Result<CatalogPage, CatalogError>;

/// Turns a raw HTTP result into a catalog page.
pub fn decode_response(result: ehttp::Result<ehttp::Response>) -> CatalogResult {
    let response = result.map_err(CatalogError::Transport)?;
    if !(200..300).contains(&response.status) {
        return Err(CatalogError::Status(response.status));
    }
    serde_json::from_slice::<CatalogPage>(&response.bytes)
        .map_err(|err| CatalogError::Decode(err.to_string()))
}

/// Requests one page of works and hands the decoded result to `on_done`.
pub fn fetch_page(
    fetcher: &dyn FetchService,
    catalog_url: &str,
    query: &CatalogQuery,
    on_done: impl FnOnce(CatalogResult) + Send + 'static,
) {
    let request = query.request(catalog_url);
    let url = request.url.clone();
    info!("Fetching catalog page: {url}");

    fetcher.fetch(
        request,
        Box::new(move |result| {
            let result = decode_response(result);
            match &result {
                Ok(page) => info!("Fetched {} works from {url}", page.works.len()),
                Err(err) => error!("Catalog request to {url} failed: {err}"),
            }
            on_done(result);
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::fetch_service::MockFetcher;

    #[test]
    fn test_query_from_pagination() {
        let mut pagination = Pagination::with_page_size(50).expect("allowed size");
        pagination.set_page(2);

        let query = CatalogQuery::new(&pagination, "dune");

        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 100);
        assert_eq!(query.search, "dune");
    }

    #[test]
    fn test_url_always_carries_all_parameters() {
        let query = CatalogQuery::new(&Pagination::default(), "");
        assert_eq!(
            query.url(DEFAULT_CATALOG_URL),
            "https://openlibrary.org/subjects/science_fiction.json?limit=10&offset=0&q="
        );
    }

    #[test]
    fn test_url_encodes_search_and_respects_existing_query() {
        let query = CatalogQuery::new(&Pagination::default(), "space & time");
        assert_eq!(
            query.url("http://localhost/books.json?lang=en"),
            "http://localhost/books.json?lang=en&limit=10&offset=0&q=space%20%26%20time"
        );
    }

    #[test]
    fn test_decode_non_success_status() {
        let fetcher = MockFetcher::default();
        fetcher.respond_with(503, Vec::new());
        let captured = Arc::new(Mutex::new(None));
        let slot = captured.clone();

        fetch_page(
            &fetcher,
            DEFAULT_CATALOG_URL,
            &CatalogQuery::new(&Pagination::default(), ""),
            move |result| *slot.lock().expect("lock") = Some(result),
        );

        assert_eq!(
            *captured.lock().expect("lock"),
            Some(Err(CatalogError::Status(503)))
        );
    }

    #[test]
    fn test_decode_malformed_body() {
        let result = decode_response(Ok(ehttp::Response {
            url: String::new(),
            ok: true,
            status: 200,
            status_text: "OK".to_owned(),
            headers: ehttp::Headers::default(),
            bytes: b"{\"works\": 5}".to_vec(),
        }));

        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_transport_error() {
        let fetcher = MockFetcher::failing("connection refused");
        let captured = Arc::new(Mutex::new(None));
        let slot = captured.clone();

        fetch_page(
            &fetcher,
            DEFAULT_CATALOG_URL,
            &CatalogQuery::new(&Pagination::default(), ""),
            move |result| *slot.lock().expect("lock") = Some(result),
        );

        assert_eq!(
            *captured.lock().expect("lock"),
            Some(Err(CatalogError::Transport("connection refused".to_owned())))
        );
    }

    #[test]
    fn test_fetch_page_decodes_works() {
        let fetcher = MockFetcher::json(&serde_json::json!({
            "work_count": 4321,
            "works": [
                { "key": "/works/1", "title": "Dune" },
                { "key": "/works/2", "title": "Solaris" }
            ]
        }));
        let captured = Arc::new(Mutex::new(None));
        let slot = captured.clone();
        let query = CatalogQuery::new(&Pagination::default(), "planet");

        fetch_page(&fetcher, DEFAULT_CATALOG_URL, &query, move |result| {
            *slot.lock().expect("lock") = Some(result);
        });

        let page = captured
            .lock()
            .expect("lock")
            .take()
            .expect("callback ran")
            .expect("page decoded");
        assert_eq!(page.work_count, Some(4321));
        assert_eq!(page.works.len(), 2);
        assert_eq!(fetcher.requested_urls(), [query.url(DEFAULT_CATALOG_URL)]);
    }
}
