use crate::channel_wrappers::{ChannelResultSender, SharedJobReceiver};
use crate::local_tally::LocalTally;
use crate::token_shutdown_signal::TokenShutdownSignal;

pub type TaskWorker<P> = worker_pool_core::Worker<
    P,
    SharedJobReceiver,
    ChannelResultSender,
    LocalTally,
    TokenShutdownSignal,
>;
