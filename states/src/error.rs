use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State reader for {type_name} was dropped")]
    ReaderDropped { type_name: &'static str },
    #[error("Task {task} was cancelled")]
    Cancelled { task: &'static str },
}

impl Error {
    pub fn reader_dropped<T>() -> Self {
        Self::ReaderDropped {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn cancelled(task: &'static str) -> Self {
        Self::Cancelled { task }
    }
}
