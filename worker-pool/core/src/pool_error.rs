use crate::{JobId, PoolReport, PoolState, PoolTask};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the pool itself, as opposed to per-job failures
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(String),

    #[error("job {0} was submitted more than once")]
    DuplicateJob(JobId),

    #[error("invalid pool state transition: {from} -> {to}")]
    InvalidTransition { from: PoolState, to: PoolState },

    /// A pool task panicked; the report holds what was collected before it
    #[error("{task} task failed: {reason} ({report})")]
    TaskFailed {
        task: PoolTask,
        reason: String,
        report: Box<PoolReport>,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
