use crate::{AsyncResultReceiver, JobResult, ShutdownSignal};
use tracing::{debug, warn};

/// How collection ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionEnd {
    /// Every expected result arrived
    Complete,
    /// The shutdown signal fired first
    Cancelled,
    /// All senders went away before the expected count was reached
    Disconnected,
}

/// Results gathered so far, with an explicit marker for how collection ended
#[derive(Debug)]
pub struct Collection {
    pub results: Vec<JobResult>,
    pub end: CollectionEnd,
}

pub struct Collector<R, SD> {
    results: R,
    shutdown: SD,
}

impl<R, SD> Collector<R, SD>
where
    R: AsyncResultReceiver,
    SD: ShutdownSignal,
{
    pub fn new(results: R, shutdown: SD) -> Self {
        Self { results, shutdown }
    }

    pub async fn collect(mut self, expected: usize) -> Collection {
        let mut results = Vec::with_capacity(expected);

        if self.shutdown.is_cancelled() {
            return Collection {
                results,
                end: CollectionEnd::Cancelled,
            };
        }

        while results.len() < expected {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    warn!(collected = results.len(), expected, "result collection cancelled");
                    return Collection { results, end: CollectionEnd::Cancelled };
                }
                next = self.results.recv() => match next {
                    Some(result) => {
                        debug!(job = result.job_id, worker = result.worker_id, "collected result");
                        results.push(result);
                    }
                    None => {
                        warn!(collected = results.len(), expected, "all workers exited early");
                        return Collection { results, end: CollectionEnd::Disconnected };
                    }
                },
            }
        }

        Collection {
            results,
            end: CollectionEnd::Complete,
        }
    }
}
