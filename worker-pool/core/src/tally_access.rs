use std::collections::BTreeMap;

/// Per-worker counters for one pool run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerTally {
    pub succeeded: u64,
    pub failed: u64,
}

impl WorkerTally {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Trait for recording worker progress in shared state
/// Abstracts the storage mechanism, implementations handle their own locking
pub trait TallyAccess: Clone + Send + Sync + 'static {
    fn record(&self, worker_id: usize, succeeded: bool);

    fn snapshot(&self) -> BTreeMap<usize, WorkerTally>;
}
