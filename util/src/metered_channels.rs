//! A simple wrapper around channel receiver types used throughout the
//! workspace which records message queue depths as they drain

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

/// A wrapper around an [`UnboundedReceiver`] which records the depth of the
/// message queue each time a message is received
pub struct MeteredUnboundedReceiver<T> {
    /// The inner receiver
    inner: UnboundedReceiver<T>,
    /// The name of the channel
    name: &'static str,
}

impl<T> MeteredUnboundedReceiver<T> {
    /// Create a new metered receiver with the given name
    pub fn new(inner: UnboundedReceiver<T>, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The number of messages currently buffered in the channel
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the channel has no buffered messages
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Receive a message from the channel, recording the queue depth
    pub async fn recv(&mut self) -> Option<T> {
        debug!("{} queue depth: {}", self.name, self.inner.len());
        self.inner.recv().await
    }
}
