pub mod moka_store;
pub mod sled_store;

pub use moka_store::MokaStore;
pub use sled_store::SledStore;

use rankprefix::domain::PlayerRankData;
use rankprefix::ports::KeyValueStore;
use shared::Result;
use shared::config::StoreBackend;
use std::path::Path;
use std::sync::Arc;

const SLED_FILE: &str = "ranks.sled";

/// Open the rank entry store selected by configuration
pub fn open_store(backend: &StoreBackend) -> Result<Arc<dyn KeyValueStore<PlayerRankData>>> {
    match backend {
        StoreBackend::Memory(max_entries) => {
            tracing::info!(
                "Using in-memory rank store (capacity: {})",
                max_entries.map_or("unbounded".to_string(), |n| n.to_string())
            );
            Ok(Arc::new(MokaStore::<PlayerRankData>::new(
                "rank-cache",
                *max_entries,
            )))
        }
        StoreBackend::Sled(data_dir) => {
            let path = Path::new(data_dir).join(SLED_FILE);
            tracing::info!("Using sled rank store at {}", path.display());
            Ok(Arc::new(SledStore::<PlayerRankData>::new(path)?))
        }
    }
}
