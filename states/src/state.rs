use flume::{Receiver, Sender, TryRecvError};

use crate::Error;

/// Creates a connected updater/reader pair for values of type `T`.
pub fn state_channel<T: Send + 'static>() -> (StateUpdater<T>, StateReader<T>) {
    let (send, recv) = flume::unbounded();
    (StateUpdater { send }, StateReader { recv })
}

/// Write half, safe to move into callbacks running on other threads.
#[derive(Debug)]
pub struct StateUpdater<T> {
    send: Sender<T>,
}

impl<T> Clone for StateUpdater<T> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<T> StateUpdater<T>
where
    T: Send + 'static,
{
    /// Publishes a new value.
    ///
    /// Fails only when the reader side is gone, which happens when the owning
    /// widget was torn down before the value arrived.
    pub fn set(&self, state: T) -> Result<(), Error> {
        self.send
            .send(state)
            .map_err(|_| Error::reader_dropped::<T>())
    }
}

/// Read half, owned by the UI thread.
#[derive(Debug)]
pub struct StateReader<T> {
    recv: Receiver<T>,
}

impl<T> StateReader<T>
where
    T: Send + 'static,
{
    /// Returns the most recent value published since the last read, if any.
    ///
    /// Older values still queued are discarded.
    pub fn read(&self) -> Option<T> {
        let mut latest = None;
        loop {
            match self.recv.try_recv() {
                Ok(state) => latest = Some(state),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}
