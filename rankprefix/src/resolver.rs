use crate::clock::format_utc_time;
use crate::domain::{CacheEntry, PlayerRankData, SubjectKey, UpstreamResult};
use crate::ports::{Clock, KeyValueStore, PlayerDataSource};
use shared::{Result, TtlMs};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How long refreshed entries stay fresh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub success_ttl: TtlMs,
    pub failure_ttl: TtlMs,
}

impl RefreshPolicy {
    pub fn new(success_ttl: TtlMs, failure_ttl: TtlMs) -> Self {
        Self {
            success_ttl,
            failure_ttl,
        }
    }

    /// Build the replacement entry for an upstream outcome.
    /// A failure keeps the previous value (or `{}`) under the short TTL.
    pub fn entry_for(
        &self,
        outcome: UpstreamResult,
        previous: Option<PlayerRankData>,
        now_ms: u64,
    ) -> CacheEntry<PlayerRankData> {
        match outcome {
            UpstreamResult::Success(data) => CacheEntry::new(data, now_ms, self.success_ttl),
            UpstreamResult::Failure(_) => {
                CacheEntry::new(previous.unwrap_or_default(), now_ms, self.failure_ttl)
            }
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(TtlMs::from_days(7), TtlMs::from_hours(12))
    }
}

/// Cache-aside lookup of player rank data
#[derive(Clone)]
pub struct CacheResolver {
    store: Arc<dyn KeyValueStore<PlayerRankData>>,
    source: Arc<dyn PlayerDataSource>,
    clock: Arc<dyn Clock>,
    policy: RefreshPolicy,
}

impl CacheResolver {
    pub fn new(
        store: Arc<dyn KeyValueStore<PlayerRankData>>,
        source: Arc<dyn PlayerDataSource>,
        clock: Arc<dyn Clock>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            store,
            source,
            clock,
            policy,
        }
    }

    /// Return the authoritative rank data for `subject`, refreshing it from
    /// upstream when missing or expired. Upstream failures never surface;
    /// store failures do.
    pub async fn resolve(&self, subject: &SubjectKey) -> Result<PlayerRankData> {
        let key = subject.as_str();
        let now = self.clock.now_ms();

        let previous = match self.store.get(key).await? {
            Some(entry) if !entry.is_expired(now) => {
                debug!(
                    "Cache hit for '{}' ({} ms remaining)",
                    key,
                    entry.remaining_ttl_ms(now)
                );
                return Ok(entry.value);
            }
            Some(entry) => {
                debug!("Cache entry for '{}' expired at {}", key, format_utc_time(entry.expires_at));
                Some(entry.value)
            }
            None => {
                debug!("Cache miss for '{}'", key);
                None
            }
        };

        let outcome = self.source.fetch_player(subject.player_id()).await;
        if let UpstreamResult::Failure(reason) = &outcome {
            warn!(
                "Upstream lookup for '{}' failed: {}. Serving {} value",
                key,
                reason,
                if previous.is_some() { "previous" } else { "empty" }
            );
        }

        let entry = self.policy.entry_for(outcome, previous, self.clock.now_ms());
        self.store.put(key, &entry).await?;

        info!(
            "Refreshed '{}', next check after {}",
            key,
            format_utc_time(entry.expires_at)
        );

        Ok(entry.value)
    }
}

impl std::fmt::Debug for CacheResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheResolver")
            .field("policy", &self.policy)
            .finish()
    }
}
