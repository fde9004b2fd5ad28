//! Hand-over plumbing between background completions and the UI thread.
//!
//! Network callbacks fire on whatever thread the HTTP backend uses. The UI owns
//! its state exclusively and polls once per frame, so results travel through a
//! [`StateUpdater`] / [`StateReader`] pair. Work that may outlive its owner is
//! tracked with a [`TaskHandle`], whose cancellation lets late completions be
//! dropped instead of delivered.

mod error;
mod state;
mod task;

pub use error::Error;
pub use state::{StateReader, StateUpdater, state_channel};
pub use task::{TaskHandle, TaskId};
