use std::sync::Arc;

use bookdash_business::{BusinessConfig, MockFetcher};
use bookdash_ui::state::State;
use bookdash_ui::utils::csv_saver::MemoryCsvSaver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_works() -> serde_json::Value {
    serde_json::json!({
        "name": "science_fiction",
        "work_count": 1234,
        "works": [
            {
                "key": "/works/OL893415W",
                "title": "Dune",
                "authors": [{ "name": "Frank Herbert" }],
                "first_publish_year": 1965
            },
            {
                "key": "/works/OL46125W",
                "title": "Foundation",
                "authors": [{ "name": "Isaac Asimov" }],
                "first_publish_year": 1951
            },
            {
                "key": "/works/OL1W",
                "title": "Kindred",
                "authors": [{ "name": "Octavia E. Butler" }],
                "subject": ["Time travel", "Slavery"]
            }
        ]
    })
}

/// State wired to a synchronous mock catalog and an in-memory CSV saver.
#[allow(unused)]
pub struct MockCtx {
    pub state: State,
    pub fetcher: Arc<MockFetcher>,
    pub saver: MemoryCsvSaver,
}

#[allow(unused)]
pub fn mock_state(fetcher: MockFetcher) -> MockCtx {
    init_logger();
    let fetcher = Arc::new(fetcher);
    let saver = MemoryCsvSaver::default();
    let state = State::with_fetcher(BusinessConfig::default(), fetcher.clone())
        .with_csv_saver(saver.clone());

    MockCtx {
        state,
        fetcher,
        saver,
    }
}

/// Mock server answering the catalog path with `body`.
#[allow(unused)]
pub async fn mock_catalog_server(body: serde_json::Value) -> MockServer {
    init_logger();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subjects/science_fiction.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Yields to the runtime and sleeps so `ehttp` callbacks can land.
#[allow(unused)]
pub async fn yield_wait_for_network(ms: u64) {
    tokio::task::yield_now().await;
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
