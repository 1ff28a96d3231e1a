use std::time::Duration;

use bookdash_business::{CatalogQuery, CatalogResult, EhttpFetcher, fetch_page};
use wiremock::MockServer;

/// Path the mock catalog is mounted on.
pub const CATALOG_PATH: &str = "/subjects/science_fiction.json";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn catalog_url(server: &MockServer) -> String {
    format!("{}{CATALOG_PATH}", server.uri())
}

/// Runs one real HTTP request against `server` and waits for the decoded result.
pub async fn fetch_from(server: &MockServer, query: &CatalogQuery) -> CatalogResult {
    let (tx, rx) = flume::bounded(1);
    fetch_page(&EhttpFetcher, &catalog_url(server), query, move |result| {
        let _ = tx.send(result);
    });

    tokio::time::timeout(Duration::from_secs(5), rx.recv_async())
        .await
        .expect("catalog request timed out")
        .expect("callback dropped without a result")
}

pub fn sample_works() -> serde_json::Value {
    serde_json::json!({
        "key": "/subjects/science_fiction",
        "name": "science_fiction",
        "work_count": 1234,
        "works": [
            {
                "key": "/works/OL893415W",
                "title": "Dune",
                "authors": [{ "key": "/authors/OL79034A", "name": "Frank Herbert" }],
                "first_publish_year": 1965,
                "subject": ["Science fiction", "Deserts"]
            },
            {
                "key": "/works/OL46125W",
                "title": "Foundation",
                "authors": [{ "key": "/authors/OL34221A", "name": "Isaac Asimov" }],
                "first_publish_year": 1951
            },
            {
                "key": "/works/OL1W",
                "title": "The Left Hand of Darkness",
                "authors": [{ "key": "/authors/OL2A", "name": "Ursula K. Le Guin" }]
            }
        ]
    })
}
