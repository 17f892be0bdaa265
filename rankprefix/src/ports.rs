use crate::domain::{CacheEntry, PlayerRankData, UpstreamResult};
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for storage, upstream and time

/// Port for the key-value backend holding cache entries.
/// At most one entry per key; `put` always overwrites.
#[async_trait]
pub trait KeyValueStore<V>: Send + Sync + 'static {
    /// Absence is `Ok(None)`, backend failures are `Error::StoreRead`
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>>;

    /// Backend failures are `Error::StoreWrite`
    async fn put(&self, key: &str, entry: &CacheEntry<V>) -> Result<()>;
}

/// Port for the upstream player-data API
#[async_trait]
pub trait PlayerDataSource: Send + Sync + 'static {
    async fn fetch_player(&self, player_id: &str) -> UpstreamResult;
}

/// Port for reading the current time in epoch milliseconds
pub trait Clock: Send + Sync + 'static {
    fn now_ms(&self) -> u64;
}

/// Receives rank shapes that no prefix rule recognized
pub trait RankObserver: Send + Sync + 'static {
    fn unrecognized_rank(&self, data: &PlayerRankData);
}
