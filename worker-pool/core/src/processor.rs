use crate::{DelayRange, Job, JobError};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Trait for the work performed on each job
/// Implementations must be safe to share across all workers of a pool
#[async_trait]
pub trait Processor: Send + Sync + 'static {
    /// Compute the value for a job
    /// Errors are reported in the job's result, they never stop the worker
    async fn process(&self, job: &Job) -> Result<i64, JobError>;
}

/// Multiplies the job id by a fixed factor
#[derive(Debug, Clone, Copy)]
pub struct Multiplier {
    factor: i64,
}

impl Multiplier {
    pub fn new(factor: i64) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> i64 {
        self.factor
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait]
impl Processor for Multiplier {
    async fn process(&self, job: &Job) -> Result<i64, JobError> {
        job.id.checked_mul(self.factor).ok_or(JobError::Overflow {
            job_id: job.id,
            factor: self.factor,
        })
    }
}

/// Sleeps for a random duration within the range before delegating
/// Stands in for jobs whose duration varies
#[derive(Debug, Clone)]
pub struct Delayed<P> {
    inner: P,
    delay: Option<DelayRange>,
}

impl<P: Processor> Delayed<P> {
    pub fn new(inner: P, delay: Option<DelayRange>) -> Self {
        Self { inner, delay }
    }

    fn pick_delay(&self) -> Duration {
        match self.delay {
            Some(range) => {
                let (low, high) = range.bounds();
                if high == 0 {
                    return Duration::ZERO;
                }
                Duration::from_millis(rand::rng().random_range(low..=high))
            }
            None => Duration::ZERO,
        }
    }
}

#[async_trait]
impl<P: Processor> Processor for Delayed<P> {
    async fn process(&self, job: &Job) -> Result<i64, JobError> {
        let delay = self.pick_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.inner.process(job).await
    }
}
