mod common;

use common::job_ids;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::time::Duration;
use worker_pool_core::{Job, Multiplier, PoolConfig};
use worker_pool_task_channels::WorkerPool;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Without cancellation every job yields exactly one result
    #[test]
    fn test_every_job_yields_exactly_one_result(
        workers in 1usize..8,
        jobs in 1i64..60,
        capacity in 1usize..8,
    ) {
        let config = PoolConfig::default()
            .with_workers(workers)
            .with_queue_capacity(capacity);
        let pool = WorkerPool::new(config, Multiplier::default()).unwrap();

        let report = runtime().block_on(pool.submit(Job::batch(1..=jobs))).unwrap();

        prop_assert!(report.is_complete());
        prop_assert_eq!(report.completed(), jobs as usize);
        prop_assert_eq!(job_ids(&report.results), (1..=jobs).collect::<BTreeSet<_>>());
        prop_assert!(report.abandoned().is_empty());
    }

    /// An immediate timeout always terminates, and finished plus abandoned jobs
    /// partition the submitted batch
    #[test]
    fn test_immediate_timeout_never_loses_jobs(
        workers in 1usize..8,
        jobs in 1i64..40,
    ) {
        let config = PoolConfig::default()
            .with_workers(workers)
            .with_timeout(Duration::ZERO);
        let pool = WorkerPool::new(config, Multiplier::default()).unwrap();

        let report = runtime().block_on(pool.submit(Job::batch(1..=jobs))).unwrap();

        prop_assert!(!report.is_complete());
        prop_assert!(report.completed() <= jobs as usize);
        let finished = job_ids(&report.results);
        let abandoned: BTreeSet<_> = report.abandoned().into_iter().collect();
        prop_assert!(finished.is_disjoint(&abandoned));
        prop_assert_eq!(finished.len() + abandoned.len(), jobs as usize);
    }
}
