use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use worker_pool_core::tally_access::{TallyAccess, WorkerTally};

/// In-process tally store shared by the workers of one pool run
#[derive(Clone, Default)]
pub struct LocalTally {
    inner: Arc<Mutex<BTreeMap<usize, WorkerTally>>>,
}

impl LocalTally {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TallyAccess for LocalTally {
    fn record(&self, worker_id: usize, succeeded: bool) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let tally = map.entry(worker_id).or_default();
        if succeeded {
            tally.succeeded += 1;
        } else {
            tally.failed += 1;
        }
    }

    fn snapshot(&self) -> BTreeMap<usize, WorkerTally> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
