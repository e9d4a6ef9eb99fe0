use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use worker_pool_core::worker_io::{AsyncJobReceiver, AsyncResultReceiver, AsyncResultSender};
use worker_pool_core::{Job, JobResult};

/// Job queue receiver shared by every worker
/// tokio's mpsc has a single consumer, so workers take turns behind a mutex
#[derive(Clone)]
pub struct SharedJobReceiver {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl SharedJobReceiver {
    pub fn new(rx: mpsc::Receiver<Job>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }
}

#[async_trait]
impl AsyncJobReceiver for SharedJobReceiver {
    async fn recv(&mut self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}

#[derive(Clone)]
pub struct ChannelResultSender {
    pub tx: mpsc::Sender<JobResult>,
}

#[async_trait]
impl AsyncResultSender for ChannelResultSender {
    async fn send(&self, result: JobResult) -> bool {
        self.tx.send(result).await.is_ok()
    }
}

pub struct ChannelResultReceiver {
    pub rx: mpsc::Receiver<JobResult>,
}

#[async_trait]
impl AsyncResultReceiver for ChannelResultReceiver {
    async fn recv(&mut self) -> Option<JobResult> {
        self.rx.recv().await
    }
}
