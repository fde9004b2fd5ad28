use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Outbound HTTP seam. The completion callback may run on any thread.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

/// Answers every request synchronously with a canned result.
///
/// With `deferred` set, callbacks are parked instead and released by
/// [`MockFetcher::complete_pending`], which lets tests deliver a completion
/// after its owner is gone.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
    pub deferred: bool,
    pending: std::sync::Mutex<Vec<PendingCallback>>,
    requests: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-utils"))]
type PendingCallback = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            response: Some(Ok(Response {
                url: "mock://users".to_owned(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: ehttp::Headers::default(),
                bytes: body.as_bytes().to_vec(),
            })),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Some(Err(message.to_owned())),
            ..Self::default()
        }
    }

    pub fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Runs every parked callback with the canned result.
    pub fn complete_pending(&self) {
        let pending = self
            .pending
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default();
        for on_done in pending {
            on_done(self.canned());
        }
    }

    fn canned(&self) -> Result<Response> {
        self.response
            .clone()
            .unwrap_or_else(|| Err("MockFetcher: no response set".to_owned()))
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Debug for MockFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFetcher")
            .field("response", &self.response)
            .field("deferred", &self.deferred)
            .field("requests", &self.requested_urls())
            .finish_non_exhaustive()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.url);
        }
        if self.deferred {
            if let Ok(mut pending) = self.pending.lock() {
                pending.push(on_done);
            }
        } else {
            on_done(self.canned());
        }
    }
}
