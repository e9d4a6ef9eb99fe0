use worker_pool_core::{PoolTask, WorkerRuntime};
use worker_pool_task_channels::TokioRuntime;

#[tokio::test]
async fn test_join_names_the_finished_task() {
    let handle = TokioRuntime::spawn(PoolTask::Worker(2), async {});
    let (task, joined) = TokioRuntime::join(handle).await;

    assert_eq!(task, PoolTask::Worker(2));
    assert!(joined.is_ok());
}

#[tokio::test]
async fn test_join_reports_panicked_task() {
    let handle = TokioRuntime::spawn(PoolTask::Dispatcher, async {
        panic!("dispatcher blew up");
    });
    let (task, joined) = TokioRuntime::join(handle).await;

    assert_eq!(task, PoolTask::Dispatcher);
    assert!(joined.unwrap_err().is_panic());
    assert_eq!(task.to_string(), "dispatcher");
    assert_eq!(PoolTask::Worker(4).to_string(), "worker 4");
}
