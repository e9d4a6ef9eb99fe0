use async_trait::async_trait;

/// Broadcast, one-way shutdown signal shared by every task of a pool run
#[async_trait]
pub trait ShutdownSignal: Clone + Send + Sync + 'static {
    fn is_cancelled(&self) -> bool;

    /// Resolves once the signal has fired
    /// Must resolve immediately when the signal already fired
    async fn cancelled(&self);
}
