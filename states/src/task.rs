//! Task identity and cooperative cancellation.
//!
//! A [`TaskHandle`] is created by whoever starts background work and a clone
//! travels with the work itself. When the owner goes away it calls
//! [`TaskHandle::cancel`]; the work checks [`TaskHandle::check`] right before
//! publishing and drops its result if the owner is gone.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

use crate::Error;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one spawned piece of background work.
///
/// `name` groups tasks of the same kind; `generation` is unique per process
/// and increases with every task created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    name: &'static str,
    generation: u64,
}

impl TaskId {
    /// Allocates a fresh id for a task of kind `name`.
    pub fn next(name: &'static str) -> Self {
        Self {
            name,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.generation)
    }
}

/// Shared cancellation handle for a background task.
///
/// Clones share one token: cancelling any clone cancels them all.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(name: &'static str) -> Self {
        Self {
            id: TaskId::next(name),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Requests cancellation. Work already running is not interrupted; it
    /// observes the request at its next [`check`](Self::check).
    pub fn cancel(&self) {
        if !self.cancel_token.is_cancelled() {
            log::debug!("Cancelling task {}", self.id);
        }
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// `Ok` while the task is still wanted.
    pub fn check(&self) -> Result<(), Error> {
        if self.is_cancelled() {
            Err(Error::cancelled(self.id.name))
        } else {
            Ok(())
        }
    }
}
