use async_trait::async_trait;

/// Sends a single echo request to a name or address.
///
/// Implementations never fail: anything that keeps the probe from running
/// counts as an unreachable target.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &str) -> bool;
}
