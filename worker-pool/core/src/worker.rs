use crate::{
    AsyncJobReceiver, AsyncResultSender, JobResult, Processor, ShutdownSignal, TallyAccess,
};
use std::sync::Arc;
use tracing::debug;

/// Why a worker loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// The job queue was closed and empty
    Drained,
    /// The shutdown signal fired
    Cancelled,
    /// Nobody is listening for results anymore
    Disconnected,
}

/// A worker pulls jobs from the shared queue until it is drained or the
/// shutdown signal fires. Generic over the processor (P), job receiver (R),
/// result sender (S), tally store (T) and shutdown signal (SD).
pub struct Worker<P, R, S, T, SD> {
    id: usize,
    processor: Arc<P>,
    jobs: R,
    results: S,
    tally: T,
    shutdown: SD,
}

impl<P, R, S, T, SD> Worker<P, R, S, T, SD>
where
    P: Processor,
    R: AsyncJobReceiver,
    S: AsyncResultSender,
    T: TallyAccess,
    SD: ShutdownSignal,
{
    pub fn new(id: usize, processor: Arc<P>, jobs: R, results: S, tally: T, shutdown: SD) -> Self {
        Self {
            id,
            processor,
            jobs,
            results,
            tally,
            shutdown,
        }
    }

    pub async fn run(mut self) -> WorkerExit {
        let exit = self.work_loop().await;
        debug!(worker = self.id, ?exit, "worker stopped");
        exit
    }

    async fn work_loop(&mut self) -> WorkerExit {
        loop {
            // Cancellation wins whenever it is ready alongside a job
            let job = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return WorkerExit::Cancelled,
                next = self.jobs.recv() => match next {
                    Some(job) => job,
                    None => return WorkerExit::Drained,
                },
            };

            let outcome = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    debug!(worker = self.id, job = job.id, "abandoned in-flight job");
                    return WorkerExit::Cancelled;
                }
                outcome = self.processor.process(&job) => outcome,
            };

            let succeeded = outcome.is_ok();
            let result = JobResult {
                job_id: job.id,
                worker_id: self.id,
                outcome,
            };

            let delivered = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return WorkerExit::Cancelled,
                delivered = self.results.send(result) => delivered,
            };
            if !delivered {
                return WorkerExit::Disconnected;
            }
            // Tallies count delivered results only
            self.tally.record(self.id, succeeded);
            debug!(worker = self.id, job = job.id, "processed job");
        }
    }
}
