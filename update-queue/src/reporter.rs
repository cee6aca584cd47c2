//! The error reporting side channel invoked when an update task fails
//!
//! Reporting is fire-and-forget; the queue advances regardless of what a
//! reporter does, including panicking

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::error;

/// A shared, dynamically dispatched error reporter
pub type SharedErrorReporter = Arc<dyn ErrorReporter>;

/// The side channel notified once per failed update task
pub trait ErrorReporter: Send + Sync {
    /// Report a task failure with the task's own error message
    fn report(&self, error: &str);
}

impl<F> ErrorReporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, error: &str) {
        self(error)
    }
}

/// The default reporter, logs each failure
pub struct LogErrorReporter;

impl ErrorReporter for LogErrorReporter {
    fn report(&self, error: &str) {
        error!("error running update task: {error}");
    }
}

/// Invoke the reporter, containing any panic it raises
pub(crate) fn report_contained(reporter: &SharedErrorReporter, err: &str) {
    if catch_unwind(AssertUnwindSafe(|| reporter.report(err))).is_err() {
        error!("error reporter panicked while handling: {err}");
    }
}
