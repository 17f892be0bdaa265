use async_trait::async_trait;
use moka::future::Cache;
use rankprefix::domain::CacheEntry;
use rankprefix::ports::KeyValueStore;
use shared::Result;
use std::fmt::Debug;

/// Moka-based in-memory store.
/// Entries expire logically through `expires_at`; the optional capacity bound
/// is the only physical eviction.
pub struct MokaStore<V>
where
    V: Debug + Send + Sync + Clone + 'static,
{
    cache: Cache<String, CacheEntry<V>>,
}

impl<V> MokaStore<V>
where
    V: Debug + Send + Sync + Clone + 'static,
{
    /// Create a Moka store from name and optional capacity
    pub fn new(name: &str, max_entries: Option<u64>) -> Self {
        let mut builder = Cache::builder().name(name);

        if let Some(capacity) = max_entries {
            builder = builder.max_capacity(capacity);
        }

        Self {
            cache: builder.build(),
        }
    }

    pub fn new_unbounded() -> Self {
        Self::new("rank-cache", None)
    }
}

#[async_trait]
impl<V> KeyValueStore<V> for MokaStore<V>
where
    V: Debug + Send + Sync + Clone + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>> {
        Ok(self.cache.get(key).await)
    }

    async fn put(&self, key: &str, entry: &CacheEntry<V>) -> Result<()> {
        self.cache.insert(key.to_string(), entry.clone()).await;
        Ok(())
    }
}

impl<V> Debug for MokaStore<V>
where
    V: Debug + Send + Sync + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaStore")
            .field("entry_count", &self.cache.entry_count())
            .field("weighted_size", &self.cache.weighted_size())
            .finish()
    }
}
