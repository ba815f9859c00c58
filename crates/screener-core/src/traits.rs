use async_trait::async_trait;
use crate::{Fundamentals, ProviderResult};

/// Source of fundamentals snapshots.
///
/// Implementations may block on network or disk; the scoring core only ever
/// sees the snapshots they return.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Snapshot for one ticker. Unknown tickers fail with `ProviderError::NotFound`.
    async fn get_fundamentals(&self, ticker: &str) -> ProviderResult<Fundamentals>;

    /// Every ticker this provider can serve.
    async fn list_universe(&self) -> ProviderResult<Vec<String>>;
}
