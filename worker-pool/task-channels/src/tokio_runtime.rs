use std::future::Future;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info_span, Instrument};
use worker_pool_core::worker_runtime::{PoolTask, WorkerRuntime};

/// Runs pool tasks on the ambient tokio runtime, each inside its own span
pub struct TokioRuntime;

pub struct TokioTaskHandle {
    task: PoolTask,
    inner: JoinHandle<()>,
}

impl WorkerRuntime for TokioRuntime {
    type Handle = TokioTaskHandle;
    type Error = JoinError;

    fn spawn<Fut>(task: PoolTask, fut: Fut) -> Self::Handle
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let span = info_span!("pool_task", task = %task);
        TokioTaskHandle {
            task,
            inner: tokio::spawn(fut.instrument(span)),
        }
    }

    async fn join(handle: Self::Handle) -> (PoolTask, Result<(), Self::Error>) {
        (handle.task, handle.inner.await)
    }
}
