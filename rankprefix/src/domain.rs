use serde::{Deserialize, Serialize};
use shared::TtlMs;
use std::fmt;

/// Rank-related fields of a Hypixel player record.
///
/// Every field is optional and an empty record means "no known rank data".
/// Field names follow the upstream's camelCase so the same type reads the
/// API payload and the cached record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_package_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_plus_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_package_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rank_color: Option<String>,
}

impl PlayerRankData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A cached value with an absolute expiry (epoch milliseconds)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub expires_at: u64,
    pub value: T,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, now_ms: u64, ttl: TtlMs) -> Self {
        Self {
            expires_at: now_ms.saturating_add(ttl.0),
            value,
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_at <= now_ms
    }

    pub fn remaining_ttl_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

/// Outcome of a single upstream player lookup.
/// A failure only carries a reason for logs, never data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpstreamResult {
    Success(PlayerRankData),
    Failure(String),
}

impl UpstreamResult {
    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamResult::Success(_))
    }
}

/// Cache key for one (player, server) pair, rendered as `<player>:<server>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubjectKey {
    player_id: String,
    key: String,
}

impl SubjectKey {
    pub fn new(player_id: impl Into<String>, server: impl Into<String>) -> Self {
        let player_id = player_id.into();
        let key = format!("{}:{}", player_id, server.into());
        Self { player_id, key }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
