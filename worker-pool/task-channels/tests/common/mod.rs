#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use worker_pool_core::{Job, JobError, JobId, JobResult, Processor};

/// Never finishes a job within any test's patience
pub struct Stalled;

#[async_trait]
impl Processor for Stalled {
    async fn process(&self, _job: &Job) -> Result<i64, JobError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(0)
    }
}

/// Rejects even job ids, doubles odd ones
pub struct RejectEven;

#[async_trait]
impl Processor for RejectEven {
    async fn process(&self, job: &Job) -> Result<i64, JobError> {
        if job.id % 2 == 0 {
            Err(JobError::Rejected {
                job_id: job.id,
                reason: "even".to_string(),
            })
        } else {
            Ok(job.id * 2)
        }
    }
}

/// Finishes the first `fast` jobs immediately and stalls on the rest
pub struct FastThenStalled {
    pub fast: usize,
    pub started: Arc<AtomicUsize>,
}

#[async_trait]
impl Processor for FastThenStalled {
    async fn process(&self, job: &Job) -> Result<i64, JobError> {
        if self.started.fetch_add(1, Ordering::SeqCst) >= self.fast {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        Ok(job.id * 2)
    }
}

/// Panics on one job id
pub struct PanicOn(pub JobId);

#[async_trait]
impl Processor for PanicOn {
    async fn process(&self, job: &Job) -> Result<i64, JobError> {
        if job.id == self.0 {
            panic!("processor blew up on job {}", job.id);
        }
        Ok(job.id * 2)
    }
}

pub fn job_ids(results: &[JobResult]) -> BTreeSet<JobId> {
    results.iter().map(|r| r.job_id).collect()
}
