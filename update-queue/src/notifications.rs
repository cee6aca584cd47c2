//! Defines the handle by which a submitter may await an update's execution
//!
//! The executor dequeues updates one at a time and runs each to completion.
//! Only then is the outcome delivered on the submitter's notification channel.

use futures::{future::FutureExt, ready};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use util::err_str;

use tokio::sync::oneshot::{
    Receiver as OneshotReceiver, Sender as OneshotSender, channel as oneshot_channel,
};

use crate::error::UpdateQueueError;

/// The result type an update task body produces
pub type TaskResult<T> = Result<T, String>;
/// The sender type of an update notification channel
pub type UpdateNotificationSender<T> = OneshotSender<TaskResult<T>>;

/// Create a new notification channel and the waiter wrapping its receiver
pub fn new_update_notification<T>() -> (UpdateNotificationSender<T>, UpdateWaiter<T>) {
    let (sender, receiver) = oneshot_channel();
    (sender, UpdateWaiter::new(receiver))
}

/// The update waiter awaits an update's execution on the queue
///
/// Dropping the waiter does not withdraw the update; it runs regardless
#[derive(Debug)]
pub struct UpdateWaiter<T> {
    /// The channel on which the outcome will be sent
    recv: OneshotReceiver<TaskResult<T>>,
}

impl<T> UpdateWaiter<T> {
    /// Create a new update waiter
    pub fn new(recv: OneshotReceiver<TaskResult<T>>) -> Self {
        Self { recv }
    }
}

impl<T> Future for UpdateWaiter<T> {
    type Output = Result<T, UpdateQueueError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = ready!(self.recv.poll_unpin(cx))
            .map_err(err_str!(UpdateQueueError::Shutdown))?; // RecvError

        Poll::Ready(outcome.map_err(UpdateQueueError::Task))
    }
}

#[cfg(test)]
mod test {
    use crate::error::UpdateQueueError;

    use super::new_update_notification;

    /// Test a waiter on a successful update
    #[tokio::test]
    async fn test_successful_update() {
        let (sender, waiter) = new_update_notification();

        sender.send(Ok(42u64)).unwrap();
        assert_eq!(waiter.await.unwrap(), 42);
    }

    /// Test a waiter on a failed update; the task's message passes through
    #[tokio::test]
    async fn test_failed_update() {
        let (sender, waiter) = new_update_notification::<()>();

        sender.send(Err("boom".to_string())).unwrap();
        let err = waiter.await.unwrap_err();
        assert!(matches!(&err, UpdateQueueError::Task(msg) if msg == "boom"));
    }

    /// Test a waiter whose sender is dropped before an outcome is delivered
    #[tokio::test]
    async fn test_sender_dropped() {
        let (sender, waiter) = new_update_notification::<()>();

        drop(sender);
        let err = waiter.await.unwrap_err();
        assert!(matches!(err, UpdateQueueError::Shutdown(_)));
    }
}
