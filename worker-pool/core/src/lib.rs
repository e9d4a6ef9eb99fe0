mod job;
pub use job::{Job, JobId, JobResult};

mod job_error;
pub use job_error::JobError;

mod pool_error;
pub use pool_error::PoolError;

pub mod processor;
pub use processor::{Delayed, Multiplier, Processor};

mod pool_state;
pub use pool_state::PoolState;

mod pool_report;
pub use pool_report::{CancelReason, PoolOutcome, PoolReport};

mod pool_config;
pub use pool_config::{DelayRange, PoolConfig};

pub mod shutdown_signal;
pub use shutdown_signal::ShutdownSignal;

pub mod worker_io;
pub use worker_io::{AsyncJobReceiver, AsyncResultReceiver, AsyncResultSender};

pub mod tally_access;
pub use tally_access::{TallyAccess, WorkerTally};

pub mod worker_runtime;
pub use worker_runtime::{PoolTask, WorkerRuntime};

mod worker;
pub use worker::{Worker, WorkerExit};

mod collector;
pub use collector::{Collection, CollectionEnd, Collector};
