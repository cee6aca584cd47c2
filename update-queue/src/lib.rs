//! An embedded queue that serializes asynchronous mutations against a shared
//! resource
//!
//! Submitters hand the queue zero-argument async tasks; the queue runs them
//! strictly one at a time in submission order, isolates each task's failure
//! to the submitter that enqueued it, and reports failures on a pluggable
//! side channel without ever stalling subsequent work

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::needless_pass_by_ref_mut)]

mod driver;
pub mod error;
pub mod jobs;
pub mod notifications;
pub mod queue;
pub mod reporter;

pub use error::UpdateQueueError;
pub use notifications::{TaskResult, UpdateWaiter};
pub use queue::UpdateQueue;

use std::future::Future;

/// A helper to submit an update to the queue and await its completion
pub async fn enqueue_and_await<T, F, Fut>(
    queue: &UpdateQueue,
    task: F,
) -> Result<T, UpdateQueueError>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = TaskResult<T>> + Send + 'static,
{
    queue.enqueue(task).await
}
