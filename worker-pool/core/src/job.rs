use crate::JobError;

pub type JobId = i64;

/// A unit of work submitted to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job {
    pub id: JobId,
}

impl Job {
    pub fn new(id: JobId) -> Self {
        Self { id }
    }

    /// Builds one job per id, preserving order
    pub fn batch(ids: impl IntoIterator<Item = JobId>) -> Vec<Job> {
        ids.into_iter().map(Job::new).collect()
    }
}

/// Output produced by one worker for one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub job_id: JobId,
    pub worker_id: usize,
    pub outcome: Result<i64, JobError>,
}

impl JobResult {
    pub fn value(&self) -> Option<i64> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}
