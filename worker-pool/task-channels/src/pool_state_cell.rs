use tokio::sync::watch;
use worker_pool_core::{PoolError, PoolState};

/// Owner of the pool lifecycle state; observers hold watch receivers
pub struct PoolStateCell {
    tx: watch::Sender<PoolState>,
}

impl PoolStateCell {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(PoolState::Idle);
        Self { tx }
    }

    pub fn current(&self) -> PoolState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PoolState> {
        self.tx.subscribe()
    }

    /// Moves to `next`, rejecting anything outside Idle -> Running -> terminal
    pub fn advance(&self, next: PoolState) -> Result<(), PoolError> {
        let mut rejected = None;
        self.tx.send_if_modified(|state| {
            if state.can_transition_to(next) {
                *state = next;
                true
            } else {
                rejected = Some(*state);
                false
            }
        });
        match rejected {
            Some(from) => Err(PoolError::InvalidTransition { from, to: next }),
            None => Ok(()),
        }
    }
}

impl Default for PoolStateCell {
    fn default() -> Self {
        Self::new()
    }
}
