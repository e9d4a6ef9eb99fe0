use async_trait::async_trait;
use std::sync::{Arc, OnceLock};
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use worker_pool_core::shutdown_signal::ShutdownSignal;
use worker_pool_core::CancelReason;

/// Tokio CancellationToken-based shutdown signal with an optional deadline
///
/// Whoever trips the signal first records the reason; the token then
/// broadcasts to every clone. The deadline is checked against the clock on
/// every query, so an already expired deadline is observed without waiting
/// for the timer driver.
#[derive(Clone)]
pub struct TokenShutdownSignal {
    token: CancellationToken,
    reason: Arc<OnceLock<CancelReason>>,
    deadline: Option<Instant>,
}

impl TokenShutdownSignal {
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            reason: Arc::new(OnceLock::new()),
            deadline: None,
        }
    }

    /// Returns a signal sharing this one's token and reason, armed with a deadline
    pub fn with_deadline(&self, deadline: Option<Instant>) -> Self {
        Self {
            token: self.token.clone(),
            reason: self.reason.clone(),
            deadline,
        }
    }

    pub fn cancel(&self, reason: CancelReason) {
        let _ = self.reason.set(reason);
        self.token.cancel();
    }

    /// The reason recorded by the first trigger, if any
    pub fn reason(&self) -> Option<CancelReason> {
        self.reason.get().copied()
    }

    fn deadline_passed(&self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.cancel(CancelReason::Timeout);
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl ShutdownSignal for TokenShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline_passed()
    }

    async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => {}
                    _ = sleep_until(deadline) => self.cancel(CancelReason::Timeout),
                }
            }
            None => self.token.cancelled().await,
        }
    }
}
