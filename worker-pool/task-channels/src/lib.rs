pub mod channel_wrappers;
pub mod dispatcher;
pub mod local_tally;
pub mod pool_state_cell;
pub mod token_shutdown_signal;
pub mod tokio_runtime;
pub mod worker;
pub mod worker_pool;

pub use dispatcher::Dispatcher;
pub use local_tally::LocalTally;
pub use token_shutdown_signal::TokenShutdownSignal;
pub use tokio_runtime::TokioRuntime;
pub use worker::TaskWorker;
pub use worker_pool::{PoolHandle, WorkerPool};
