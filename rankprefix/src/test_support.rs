// In-memory fakes for the ports, shared by unit tests in this crate

use crate::domain::{CacheEntry, PlayerRankData, UpstreamResult};
use crate::ports::{KeyValueStore, PlayerDataSource};
use async_trait::async_trait;
use shared::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeStore {
    entries: Mutex<HashMap<String, CacheEntry<PlayerRankData>>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FakeStore {
    pub fn seed(&self, key: &str, entry: CacheEntry<PlayerRankData>) {
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }

    pub fn entry(&self, key: &str) -> Option<CacheEntry<PlayerRankData>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore<PlayerRankData> for FakeStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry<PlayerRankData>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::StoreRead("backend unavailable".into()));
        }
        Ok(self.entry(key))
    }

    async fn put(&self, key: &str, entry: &CacheEntry<PlayerRankData>) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::StoreWrite("backend unavailable".into()));
        }
        self.seed(key, entry.clone());
        Ok(())
    }
}

/// Replays queued outcomes; fails once the queue is empty
#[derive(Default)]
pub struct FakeSource {
    outcomes: Mutex<VecDeque<UpstreamResult>>,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with(outcomes: impl IntoIterator<Item = UpstreamResult>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayerDataSource for FakeSource {
    async fn fetch_player(&self, player_id: &str) -> UpstreamResult {
        self.requested.lock().unwrap().push(player_id.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| UpstreamResult::Failure("no scripted outcome".into()))
    }
}
