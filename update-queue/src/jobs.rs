//! Job types for the update queue

use futures::future::BoxFuture;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use util::metered_channels::MeteredUnboundedReceiver;

/// The name of the job channel, used when recording queue depth
const UPDATE_QUEUE_CHANNEL: &str = "update-queue";

/// A queued update; the type-erased body of a submitted task
///
/// The body runs the task, reports any failure on the side channel, and
/// delivers the outcome on the submitter's notification channel. It never
/// panics, so the executor may await it directly.
pub type QueuedUpdate = BoxFuture<'static, ()>;
/// The queue sender type used to submit updates to the executor
pub type UpdateQueueSender = UnboundedSender<QueuedUpdate>;
/// The queue receiver type the executor drains
pub type UpdateQueueReceiver = MeteredUnboundedReceiver<QueuedUpdate>;

/// Create a new update queue channel
pub fn new_update_queue_channel() -> (UpdateQueueSender, UpdateQueueReceiver) {
    let (send, recv) = unbounded_channel();
    (send, MeteredUnboundedReceiver::new(recv, UPDATE_QUEUE_CHANNEL))
}
