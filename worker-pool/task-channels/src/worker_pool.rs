use crate::channel_wrappers::{ChannelResultReceiver, ChannelResultSender, SharedJobReceiver};
use crate::dispatcher::Dispatcher;
use crate::local_tally::LocalTally;
use crate::pool_state_cell::PoolStateCell;
use crate::token_shutdown_signal::TokenShutdownSignal;
use crate::tokio_runtime::TokioRuntime;
use crate::worker::TaskWorker;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use worker_pool_core::{
    CancelReason, Collector, CollectionEnd, Delayed, Job, JobId, Multiplier, PoolConfig,
    PoolError, PoolOutcome, PoolReport, PoolState, PoolTask, Processor, ShutdownSignal,
    TallyAccess, WorkerRuntime,
};

/// Fixed-size pool of tokio worker tasks fed through bounded mpsc queues
///
/// A pool runs exactly once: `submit` consumes it. Use a [`PoolHandle`],
/// taken before submitting, to cancel the run or watch its state.
pub struct WorkerPool<P> {
    config: PoolConfig,
    processor: Arc<P>,
    signal: TokenShutdownSignal,
    state: PoolStateCell,
}

/// Cancels a pool run and observes its lifecycle from another task
#[derive(Clone)]
pub struct PoolHandle {
    signal: TokenShutdownSignal,
    state: watch::Receiver<PoolState>,
}

impl PoolHandle {
    /// Fires the shared cancellation signal; later calls have no effect
    pub fn cancel(&self) {
        self.signal.cancel(CancelReason::Requested);
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.is_cancelled()
    }

    pub fn state(&self) -> PoolState {
        *self.state.borrow()
    }

    /// Waits for a terminal state
    /// Returns the last known state if the pool is dropped without finishing
    pub async fn finished(&mut self) -> PoolState {
        let finished = self
            .state
            .wait_for(|state| state.is_terminal())
            .await
            .map(|state| *state);
        finished.unwrap_or_else(|_| *self.state.borrow())
    }
}

impl WorkerPool<Delayed<Multiplier>> {
    /// Pool running the multiplier with the configured simulated delay
    pub fn from_config(config: PoolConfig) -> Result<Self, PoolError> {
        let processor = Delayed::new(Multiplier::new(config.factor), config.work_delay_ms);
        Self::new(config, processor)
    }
}

impl<P: Processor> WorkerPool<P> {
    pub fn new(config: PoolConfig, processor: P) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            config,
            processor: Arc::new(processor),
            signal: TokenShutdownSignal::new(CancellationToken::new()),
            state: PoolStateCell::new(),
        })
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn state(&self) -> PoolState {
        self.state.current()
    }

    pub fn handle(&self) -> PoolHandle {
        PoolHandle {
            signal: self.signal.clone(),
            state: self.state.subscribe(),
        }
    }

    /// Runs every job through the pool and gathers the results
    ///
    /// Returns a report whose outcome is either `Completed` (one result per
    /// job) or `Cancelled` (the results gathered before the signal fired).
    /// Errors are reserved for misuse and failed tasks; a failed task's error
    /// still carries the partial report.
    pub async fn submit(self, jobs: Vec<Job>) -> Result<PoolReport, PoolError> {
        let submitted = distinct_ids(&jobs)?;
        let expected = submitted.len();
        let num_workers = self.config.num_workers;

        self.state.advance(PoolState::Running)?;
        let started = Instant::now();
        let signal = self
            .signal
            .with_deadline(self.config.timeout().map(|timeout| started + timeout));
        info!(
            workers = num_workers,
            jobs = expected,
            timeout_ms = ?self.config.timeout_ms,
            "pool running"
        );

        let (job_tx, job_rx) = mpsc::channel::<Job>(self.config.queue_capacity);
        let (result_tx, result_rx) = mpsc::channel(self.config.queue_capacity);
        let job_rx = SharedJobReceiver::new(job_rx);
        let tally = LocalTally::new();

        let mut workers = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let worker = TaskWorker::<P>::new(
                worker_id,
                self.processor.clone(),
                job_rx.clone(),
                ChannelResultSender {
                    tx: result_tx.clone(),
                },
                tally.clone(),
                signal.clone(),
            );
            workers.push(TokioRuntime::spawn(PoolTask::Worker(worker_id), async move {
                worker.run().await;
            }));
        }
        // Workers now hold the only receivers and senders
        drop(job_rx);
        drop(result_tx);

        let dispatcher = Dispatcher::new(job_tx, signal.clone());
        let dispatch = TokioRuntime::spawn(PoolTask::Dispatcher, async move {
            dispatcher.run(jobs).await;
        });

        let collection = Collector::new(ChannelResultReceiver { rx: result_rx }, signal.clone())
            .collect(expected)
            .await;

        let outcome = match collection.end {
            CollectionEnd::Complete => PoolOutcome::Completed,
            CollectionEnd::Cancelled => PoolOutcome::Cancelled {
                reason: signal.reason().unwrap_or(CancelReason::Requested),
            },
            CollectionEnd::Disconnected => {
                signal.cancel(CancelReason::WorkerFailure);
                PoolOutcome::Cancelled {
                    reason: CancelReason::WorkerFailure,
                }
            }
        };

        let mut failed_task = None;
        for handle in std::iter::once(dispatch).chain(workers) {
            let (task, joined) = TokioRuntime::join(handle).await;
            if let Err(e) = joined {
                error!("{} task failed: {}", task, e);
                if failed_task.is_none() {
                    failed_task = Some((task, e.to_string()));
                }
            }
        }

        let report = PoolReport {
            outcome,
            results: collection.results,
            submitted,
            tallies: tally.snapshot(),
            elapsed: started.elapsed(),
        };
        self.state.advance(report.state())?;

        if let Some((task, reason)) = failed_task {
            return Err(PoolError::TaskFailed {
                task,
                reason,
                report: Box::new(report),
            });
        }

        match report.outcome {
            PoolOutcome::Completed => info!(
                elapsed_ms = report.elapsed.as_millis() as u64,
                "pool {}", report
            ),
            PoolOutcome::Cancelled { .. } => warn!(
                elapsed_ms = report.elapsed.as_millis() as u64,
                abandoned = report.abandoned().len(),
                "pool {}", report
            ),
        }
        Ok(report)
    }
}

fn distinct_ids(jobs: &[Job]) -> Result<Vec<JobId>, PoolError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id) {
            return Err(PoolError::DuplicateJob(job.id));
        }
    }
    Ok(jobs.iter().map(|job| job.id).collect())
}
