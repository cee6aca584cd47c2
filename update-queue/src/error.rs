//! Error types emitted by the update queue

use thiserror::Error;

/// The error type emitted by the update queue
#[derive(Clone, Debug, Error)]
pub enum UpdateQueueError {
    /// An update task failed; carries the task's own error message untouched
    #[error("{0}")]
    Task(String),
    /// The executor shut down before the update's outcome was delivered
    #[error("update queue shut down: {0}")]
    Shutdown(String),
}
