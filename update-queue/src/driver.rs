//! The executor drains the job channel, running each queued update to
//! completion before starting the next

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::jobs::UpdateQueueReceiver;

/// Runs queued updates strictly one at a time
pub(crate) struct UpdateExecutor {
    /// The channel on which to receive queued updates
    job_queue: UpdateQueueReceiver,
}

impl UpdateExecutor {
    /// Constructor
    pub fn new(job_queue: UpdateQueueReceiver) -> Self {
        Self { job_queue }
    }

    /// Spawn the executor loop onto the ambient runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// The execution loop of the `UpdateExecutor`
    ///
    /// Awaiting each update before receiving the next is what serializes the
    /// queue; no two update bodies are ever in flight together. The loop
    /// exits once every queue handle has been dropped and the channel has
    /// been drained.
    async fn run(mut self) {
        info!("starting update queue executor loop");
        while let Some(update) = self.job_queue.recv().await {
            update.await;
        }

        debug!("update queue executor loop exiting");
    }
}
