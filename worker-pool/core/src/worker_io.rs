use crate::{Job, JobResult};
use async_trait::async_trait;

/// Trait for receiving jobs asynchronously
#[async_trait]
pub trait AsyncJobReceiver: Send {
    /// Receive the next job
    /// Returns None once the queue is closed and drained
    async fn recv(&mut self) -> Option<Job>;
}

/// Trait for publishing results asynchronously
#[async_trait]
pub trait AsyncResultSender: Send + Sync {
    /// Returns false if the receiving side is gone
    async fn send(&self, result: JobResult) -> bool;
}

/// Trait for consuming results asynchronously
#[async_trait]
pub trait AsyncResultReceiver: Send {
    /// Returns None once every sender is gone
    async fn recv(&mut self) -> Option<JobResult>;
}
