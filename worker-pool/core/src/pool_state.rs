use std::fmt;

/// Lifecycle of a single pool run
/// Idle -> Running -> {Completed | Cancelled}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl PoolState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PoolState::Completed | PoolState::Cancelled)
    }

    pub fn can_transition_to(self, next: PoolState) -> bool {
        matches!(
            (self, next),
            (PoolState::Idle, PoolState::Running)
                | (PoolState::Running, PoolState::Completed)
                | (PoolState::Running, PoolState::Cancelled)
        )
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoolState::Idle => "idle",
            PoolState::Running => "running",
            PoolState::Completed => "completed",
            PoolState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}
