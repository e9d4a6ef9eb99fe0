use tokio::sync::mpsc;
use tracing::{debug, warn};
use worker_pool_core::{Job, ShutdownSignal};

/// Feeds jobs into the queue and closes it when done
///
/// The dispatcher is the only owner of the queue's sending half. `run`
/// consumes it, so the queue is closed exactly once, after the last send.
pub struct Dispatcher<SD> {
    tx: mpsc::Sender<Job>,
    shutdown: SD,
}

impl<SD: ShutdownSignal> Dispatcher<SD> {
    pub fn new(tx: mpsc::Sender<Job>, shutdown: SD) -> Self {
        Self { tx, shutdown }
    }

    /// Returns the number of jobs enqueued
    pub async fn run(self, jobs: Vec<Job>) -> usize {
        let total = jobs.len();
        let mut sent = 0;
        for job in jobs {
            let delivered = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    warn!(sent, total, "dispatch cancelled");
                    return sent;
                }
                delivered = self.tx.send(job) => delivered.is_ok(),
            };
            if !delivered {
                warn!(sent, total, "job queue closed, no workers left");
                return sent;
            }
            sent += 1;
        }
        debug!(sent, "all jobs dispatched, closing job queue");
        sent
    }
}
