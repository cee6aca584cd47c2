//! The public handle onto the update queue
//!
//! Callers submit zero-argument async tasks; the queue runs them strictly
//! one at a time in submission order. Submission is infallible and
//! non-blocking, and a task's failure is delivered only to its submitter
//! plus the error reporting side channel.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::debug;

use crate::driver::UpdateExecutor;
use crate::jobs::{UpdateQueueSender, new_update_queue_channel};
use crate::notifications::{TaskResult, UpdateWaiter, new_update_notification};
use crate::reporter::{ErrorReporter, LogErrorReporter, SharedErrorReporter, report_contained};

/// Serializes submitted asynchronous mutations, running them strictly one at
/// a time in submission order
///
/// Handles are cheap to clone; all clones feed the same executor. Once the
/// last handle is dropped the executor drains every update already submitted,
/// then exits.
#[derive(Clone)]
pub struct UpdateQueue {
    /// The sender onto the executor's job channel
    job_queue: UpdateQueueSender,
    /// The side channel notified of task failures
    error_reporter: SharedErrorReporter,
}

impl Default for UpdateQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateQueue {
    /// Create a new queue, reporting task failures to the log
    ///
    /// Must be called from within a tokio runtime; construction spawns the
    /// queue's executor loop
    pub fn new() -> Self {
        Self::with_error_reporter(LogErrorReporter)
    }

    /// Create a new queue with a custom error reporter
    pub fn with_error_reporter<R: ErrorReporter + 'static>(reporter: R) -> Self {
        let (job_queue, job_recv) = new_update_queue_channel();
        UpdateExecutor::new(job_recv).spawn();

        Self { job_queue, error_reporter: Arc::new(reporter) }
    }

    /// Submit an update to the queue
    ///
    /// The update's body begins only after every previously submitted update
    /// has settled, and its outcome is delivered on the returned waiter once
    /// it has actually run. A failed update never prevents later updates from
    /// running; a panicking task is handled like any other failure.
    ///
    /// Submission itself never fails; if the executor is gone the waiter
    /// resolves with a shutdown error.
    pub fn enqueue<T, F, Fut>(&self, task: F) -> UpdateWaiter<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = TaskResult<T>> + Send + 'static,
    {
        let (sender, waiter) = new_update_notification();
        let reporter = self.error_reporter.clone();

        let job = async move {
            // Invoke the task inside the panic guard so that a task which
            // panics before returning its future is handled like one whose
            // future panics mid-flight
            let outcome = match AssertUnwindSafe(async move { task().await }).catch_unwind().await
            {
                Ok(result) => result,
                Err(panic) => Err(panic_message(panic.as_ref())),
            };

            if let Err(e) = &outcome {
                report_contained(&reporter, e);
            }

            // The submitter may have dropped its waiter; the update has
            // already been applied either way
            let _ = sender.send(outcome);
        }
        .boxed();

        if self.job_queue.send(job).is_err() {
            debug!("update queue executor has shut down, dropping update");
        }

        waiter
    }
}

/// Render a panic payload as a task error message
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "update task panicked".to_string()
    }
}
