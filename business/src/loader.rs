//! One-shot fetch of the user collection.
//!
//! [`UsersLoader::start`] issues a single `GET` through a [`FetchService`]. The
//! completion callback decodes the payload off the UI thread and publishes a
//! [`LoadResult`] which the UI picks up with [`UsersLoader::poll`]. Dropping
//! the loader cancels its task, so a response arriving after teardown is
//! discarded instead of delivered.

use ehttp::Response;
use log::{debug, error, info};
use thiserror::Error;
use usergrid_states::{StateReader, TaskHandle, TaskId, state_channel};

use crate::{FetchService, UserRecord};

pub type LoadResult = Result<Vec<UserRecord>, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("Network response was not ok (status {0})")]
    Status(u16),
    #[error("Failed to parse users: {0}")]
    Decode(String),
}

/// Turns a raw response into records. Any non-2xx status is a failure.
pub fn decode_users(response: &Response) -> LoadResult {
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_slice(&response.bytes).map_err(|e| FetchError::Decode(e.to_string()))
}

#[derive(Debug)]
pub struct UsersLoader {
    reader: StateReader<LoadResult>,
    task: TaskHandle,
}

impl UsersLoader {
    /// Starts the request. `on_complete` runs on the callback thread once a
    /// result was handed over; the UI uses it to request a repaint.
    pub fn start(
        fetcher: &dyn FetchService,
        url: &str,
        on_complete: impl Fn() + Send + 'static,
    ) -> Self {
        let (updater, reader) = state_channel::<LoadResult>();
        let task = TaskHandle::new("load_users");
        let in_flight = task.clone();

        info!("UsersLoader: fetching {url} ({})", task.id());

        fetcher.fetch(
            ehttp::Request::get(url),
            Box::new(move |result| {
                if let Err(err) = in_flight.check() {
                    debug!("UsersLoader: dropping late response: {err}");
                    return;
                }

                let outcome = result
                    .map_err(FetchError::Transport)
                    .and_then(|response| decode_users(&response));

                match &outcome {
                    Ok(users) => info!("UsersLoader: fetched {} users", users.len()),
                    Err(err) => error!("UsersLoader: error fetching data: {err}"),
                }

                match updater.set(outcome) {
                    Ok(()) => on_complete(),
                    Err(err) => debug!("UsersLoader: {err}"),
                }
            }),
        );

        Self { reader, task }
    }

    /// Takes the result if it arrived since the last poll.
    pub fn poll(&self) -> Option<LoadResult> {
        self.reader.read()
    }

    pub fn task_id(&self) -> TaskId {
        self.task.id()
    }
}

impl Drop for UsersLoader {
    fn drop(&mut self) {
        self.task.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{MockFetcher, RecordId};

    const TWO_USERS: &str = r#"[
        {"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","phone":"1-770-736-8031 x56442"},
        {"id":2,"name":"Ervin Howell","username":"Antonette","email":"Shanna@melissa.tv","phone":"010-692-6593 x09125"}
    ]"#;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn successful_fetch_delivers_records() {
        let _ = env_logger::builder().is_test(true).try_init();
        let fetcher = MockFetcher::json(200, TWO_USERS);
        let (repaints, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        let users = loader.poll().expect("result published").unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, RecordId::Number(2));
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
        assert_eq!(fetcher.requested_urls(), vec!["mock://users".to_owned()]);
        assert!(loader.poll().is_none());
    }

    #[test]
    fn non_success_status_is_a_failure() {
        let fetcher = MockFetcher::json(404, "{}");
        let (_, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        let err = loader.poll().unwrap().unwrap_err();

        assert_eq!(err, FetchError::Status(404));
        assert_eq!(err.to_string(), "Network response was not ok (status 404)");
    }

    #[test]
    fn transport_failure_keeps_its_message() {
        let fetcher = MockFetcher::failing("connection refused");
        let (_, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        let err = loader.poll().unwrap().unwrap_err();

        assert_eq!(err, FetchError::Transport("connection refused".to_owned()));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn malformed_payload_is_a_decode_failure() {
        let fetcher = MockFetcher::json(200, r#"{"users": []}"#);
        let (_, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        assert!(matches!(
            loader.poll().unwrap(),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn late_completion_after_drop_is_ignored() {
        let fetcher = MockFetcher::json(200, TWO_USERS).deferred();
        let (repaints, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        assert!(loader.poll().is_none());
        drop(loader);

        fetcher.complete_pending();
        assert_eq!(repaints.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn deferred_completion_is_picked_up_by_poll() {
        let fetcher = MockFetcher::json(200, TWO_USERS).deferred();
        let (repaints, on_complete) = counter();

        let loader = UsersLoader::start(&fetcher, "mock://users", on_complete);
        assert!(loader.poll().is_none());

        fetcher.complete_pending();
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
        assert_eq!(loader.poll().unwrap().unwrap().len(), 2);
    }

    #[test]
    fn each_loader_gets_its_own_task() {
        let fetcher = MockFetcher::json(200, "[]");
        let first = UsersLoader::start(&fetcher, "mock://users", || {});
        let second = UsersLoader::start(&fetcher, "mock://users", || {});
        assert_ne!(first.task_id(), second.task_id());
    }
}
