use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Completion callback handed to a [`FetchService`].
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Performs HTTP requests for the catalog client.
///
/// The callback may run on another thread, or synchronously before `fetch` returns.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::Mutex;

    use super::{FetchService, OnDone};
    use ehttp::{Headers, Request, Response, Result};

    /// Answers every request synchronously with a canned response and remembers
    /// the requested URLs.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        response: Mutex<Option<Result<Response>>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        /// A fetcher that answers `200 OK` with `body` serialized as JSON.
        pub fn json(body: &serde_json::Value) -> Self {
            let fetcher = Self::default();
            fetcher.respond_with(200, body.to_string().into_bytes());
            fetcher
        }

        /// A fetcher whose requests fail at the transport level.
        pub fn failing(message: impl Into<String>) -> Self {
            let fetcher = Self::default();
            fetcher.set_response(Err(message.into()));
            fetcher
        }

        pub fn respond_with(&self, status: u16, bytes: Vec<u8>) {
            self.set_response(Ok(Response {
                url: String::new(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: Headers::default(),
                bytes,
            }));
        }

        pub fn set_response(&self, response: Result<Response>) {
            if let Ok(mut slot) = self.response.lock() {
                *slot = Some(response);
            }
        }

        /// URLs of every request seen so far, oldest first.
        pub fn requested_urls(&self) -> Vec<String> {
            self.requested
                .lock()
                .map(|urls| urls.clone())
                .unwrap_or_default()
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            if let Ok(mut urls) = self.requested.lock() {
                urls.push(request.url);
            }

            let response = self
                .response
                .lock()
                .ok()
                .and_then(|slot| slot.clone());

            match response {
                Some(response) => on_done(response),
                None => on_done(Err("MockFetcher: no response set".to_string())),
            }
        }
    }
}
