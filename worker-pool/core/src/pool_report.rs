use crate::{JobError, JobId, JobResult, PoolState, WorkerTally};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::time::Duration;

/// What tripped the cancellation signal first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    Timeout,
    Requested,
    WorkerFailure,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CancelReason::Timeout => "timeout",
            CancelReason::Requested => "requested",
            CancelReason::WorkerFailure => "worker failure",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOutcome {
    Completed,
    Cancelled { reason: CancelReason },
}

/// Everything a caller learns from one pool run
#[derive(Debug, Clone)]
pub struct PoolReport {
    pub outcome: PoolOutcome,
    pub results: Vec<JobResult>,
    pub submitted: Vec<JobId>,
    pub tallies: BTreeMap<usize, WorkerTally>,
    pub elapsed: Duration,
}

impl PoolReport {
    pub fn state(&self) -> PoolState {
        match self.outcome {
            PoolOutcome::Completed => PoolState::Completed,
            PoolOutcome::Cancelled { .. } => PoolState::Cancelled,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == PoolOutcome::Completed
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        match self.outcome {
            PoolOutcome::Completed => None,
            PoolOutcome::Cancelled { reason } => Some(reason),
        }
    }

    pub fn completed(&self) -> usize {
        self.results.len()
    }

    pub fn expected(&self) -> usize {
        self.submitted.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = (JobId, &JobError)> {
        self.results
            .iter()
            .filter_map(|r| r.outcome.as_ref().err().map(|e| (r.job_id, e)))
    }

    /// Successful values keyed by job id
    pub fn values(&self) -> BTreeMap<JobId, i64> {
        self.results
            .iter()
            .filter_map(|r| r.value().map(|v| (r.job_id, v)))
            .collect()
    }

    /// Submitted jobs that produced no result, in submission order
    /// Always empty for a completed run
    pub fn abandoned(&self) -> Vec<JobId> {
        let finished: HashSet<JobId> = self.results.iter().map(|r| r.job_id).collect();
        self.submitted
            .iter()
            .copied()
            .filter(|id| !finished.contains(id))
            .collect()
    }
}

impl fmt::Display for PoolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            PoolOutcome::Completed => write!(
                f,
                "completed, {} of {} jobs",
                self.completed(),
                self.expected()
            ),
            PoolOutcome::Cancelled { reason } => write!(
                f,
                "cancelled ({}), {} of {} completed",
                reason,
                self.completed(),
                self.expected()
            ),
        }
    }
}
