use std::collections::BTreeMap;
use std::time::Duration;
use worker_pool_core::{
    CancelReason, JobError, JobResult, PoolOutcome, PoolReport, PoolState, WorkerTally,
};

fn result(job_id: i64, worker_id: usize, outcome: Result<i64, JobError>) -> JobResult {
    JobResult {
        job_id,
        worker_id,
        outcome,
    }
}

fn report(outcome: PoolOutcome, results: Vec<JobResult>, submitted: Vec<i64>) -> PoolReport {
    PoolReport {
        outcome,
        results,
        submitted,
        tallies: BTreeMap::new(),
        elapsed: Duration::from_millis(5),
    }
}

#[test]
fn test_completed_report_has_nothing_abandoned() {
    let report = report(
        PoolOutcome::Completed,
        vec![result(2, 0, Ok(4)), result(1, 1, Ok(2))],
        vec![1, 2],
    );

    assert!(report.is_complete());
    assert_eq!(report.state(), PoolState::Completed);
    assert_eq!(report.cancel_reason(), None);
    assert!(report.abandoned().is_empty());
    assert_eq!(report.to_string(), "completed, 2 of 2 jobs");
}

#[test]
fn test_cancelled_report_lists_abandoned_in_submission_order() {
    let report = report(
        PoolOutcome::Cancelled {
            reason: CancelReason::Timeout,
        },
        vec![result(3, 0, Ok(6))],
        vec![1, 2, 3, 4],
    );

    assert!(!report.is_complete());
    assert_eq!(report.state(), PoolState::Cancelled);
    assert_eq!(report.cancel_reason(), Some(CancelReason::Timeout));
    assert_eq!(report.abandoned(), vec![1, 2, 4]);
    assert_eq!(report.to_string(), "cancelled (timeout), 1 of 4 completed");
}

#[test]
fn test_failures_and_values_are_split() {
    let overflow = JobError::Overflow {
        job_id: 7,
        factor: 2,
    };
    let report = report(
        PoolOutcome::Completed,
        vec![result(6, 0, Ok(12)), result(7, 1, Err(overflow.clone()))],
        vec![6, 7],
    );

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures, vec![(7, &overflow)]);
    assert_eq!(report.values(), BTreeMap::from([(6, 12)]));
    assert_eq!(report.completed(), 2);
}

#[test]
fn test_worker_tally_total() {
    let tally = WorkerTally {
        succeeded: 3,
        failed: 2,
    };
    assert_eq!(tally.total(), 5);
}
