use crate::JobId;
use thiserror::Error;

/// Failure of a single job, carried inside its result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("job {job_id}: value overflows when multiplied by {factor}")]
    Overflow { job_id: JobId, factor: i64 },

    #[error("job {job_id} rejected: {reason}")]
    Rejected { job_id: JobId, reason: String },
}
