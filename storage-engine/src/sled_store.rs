use async_trait::async_trait;
use rankprefix::domain::CacheEntry;
use rankprefix::ports::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{Error, Result};
use std::marker::PhantomData;
use std::path::Path;

const ENTRIES_TREE: &str = "rank_entries";

/// Sled-based store keeping each entry as a JSON record
pub struct SledStore<V> {
    tree: sled::Tree,
    _value: PhantomData<fn() -> V>,
}

impl<V> SledStore<V> {
    /// Open (or create) the database at `path`.
    /// Creates the parent directory if it doesn't exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Internal(format!("Failed to create directory: {}", e)))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Internal(format!("Failed to open Sled database: {}", e)))?;
        let tree = db
            .open_tree(ENTRIES_TREE)
            .map_err(|e| Error::Internal(format!("Failed to open Sled tree: {}", e)))?;

        Ok(Self {
            tree,
            _value: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[async_trait]
impl<V> KeyValueStore<V> for SledStore<V>
where
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<V>>> {
        let value = self
            .tree
            .get(key.as_bytes())
            .map_err(|e| Error::StoreRead(format!("Failed to get entry: {}", e)))?;

        match value {
            Some(bytes) => {
                let entry = serde_json::from_slice(&bytes).map_err(|e| {
                    Error::StoreRead(format!("Failed to deserialize entry '{}': {}", key, e))
                })?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, entry: &CacheEntry<V>) -> Result<()> {
        let value = serde_json::to_vec(entry)
            .map_err(|e| Error::StoreWrite(format!("Failed to serialize entry: {}", e)))?;

        self.tree
            .insert(key.as_bytes(), value)
            .map_err(|e| Error::StoreWrite(format!("Failed to save entry: {}", e)))?;

        self.tree
            .flush_async()
            .await
            .map_err(|e| Error::StoreWrite(format!("Failed to flush database: {}", e)))?;

        Ok(())
    }
}

impl<V> std::fmt::Debug for SledStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore")
            .field("entries", &self.tree.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankprefix::domain::PlayerRankData;

    fn mvp_plus(expires_at: u64) -> CacheEntry<PlayerRankData> {
        CacheEntry {
            expires_at,
            value: PlayerRankData {
                new_package_rank: Some("MVP_PLUS".into()),
                rank_plus_color: Some("GOLD".into()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_sled_store_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store: SledStore<PlayerRankData> = SledStore::new(temp_dir.path().join("ranks.sled")).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.get("p:hypixel.net").await.unwrap(), None);

        store.put("p:hypixel.net", &mvp_plus(42)).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("p:hypixel.net").await.unwrap(), Some(mvp_plus(42)));
    }

    #[tokio::test]
    async fn test_sled_store_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store: SledStore<PlayerRankData> = SledStore::new(temp_dir.path().join("ranks.sled")).unwrap();

        store.put("p:hypixel.net", &mvp_plus(1)).await.unwrap();
        store
            .put(
                "p:hypixel.net",
                &CacheEntry {
                    expires_at: 2,
                    value: PlayerRankData::default(),
                },
            )
            .await
            .unwrap();

        let entry = store.get("p:hypixel.net").await.unwrap().unwrap();
        assert_eq!(entry.expires_at, 2);
        assert!(entry.value.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_sled_store_creates_parent_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("ranks.sled");

        let store: SledStore<PlayerRankData> = SledStore::new(&path).unwrap();
        store.put("p:hypixel.net", &mvp_plus(7)).await.unwrap();

        assert!(temp_dir.path().join("nested").is_dir());
        assert_eq!(store.get("p:hypixel.net").await.unwrap(), Some(mvp_plus(7)));
    }

    #[tokio::test]
    async fn test_sled_store_corrupt_record_is_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store: SledStore<PlayerRankData> =
            SledStore::new(temp_dir.path().join("ranks.sled")).unwrap();

        store.tree.insert("p:hypixel.net", "not json".as_bytes()).unwrap();

        let result = store.get("p:hypixel.net").await;
        assert!(matches!(result, Err(Error::StoreRead(_))));
    }

    #[tokio::test]
    async fn test_sled_store_reads_worker_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store: SledStore<PlayerRankData> =
            SledStore::new(temp_dir.path().join("ranks.sled")).unwrap();

        store
            .tree
            .insert(
                "p:hypixel.net",
                r#"{"expires_at":1700000000000,"value":{"rank":"YOUTUBER"}}"#.as_bytes(),
            )
            .unwrap();

        let entry = store.get("p:hypixel.net").await.unwrap().unwrap();
        assert_eq!(entry.expires_at, 1_700_000_000_000);
        assert_eq!(entry.value.rank.as_deref(), Some("YOUTUBER"));
    }
}
