use std::fmt;
use std::future::Future;

/// Identifies a spawned pool task in logs and failure reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolTask {
    Dispatcher,
    Worker(usize),
}

impl fmt::Display for PoolTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolTask::Dispatcher => f.write_str("dispatcher"),
            PoolTask::Worker(id) => write!(f, "worker {}", id),
        }
    }
}

/// Trait for abstracting how the tasks of a pool run are spawned and joined
pub trait WorkerRuntime: Send + 'static {
    type Handle: Send;
    type Error: fmt::Display + Send;

    /// Spawn the future as the given pool task
    fn spawn<Fut>(task: PoolTask, fut: Fut) -> Self::Handle
    where
        Fut: Future<Output = ()> + Send + 'static;

    /// Wait for the task, returning which task it was alongside how it ended
    fn join(
        handle: Self::Handle,
    ) -> impl Future<Output = (PoolTask, Result<(), Self::Error>)> + Send;
}
