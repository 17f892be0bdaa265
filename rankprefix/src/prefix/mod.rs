pub mod color;
pub mod rules;

pub use color::{ChatColor, translate_chat_color};
pub use rules::{PREFIX_RULES, PrefixRule, matching_rule};

use crate::domain::PlayerRankData;
use crate::ports::RankObserver;
use std::sync::Arc;

/// Returned when no rule recognizes the rank shape
pub const DEFAULT_PREFIX: &str = "&7";

/// Observer that reports unrecognized ranks through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRankObserver;

impl RankObserver for TracingRankObserver {
    fn unrecognized_rank(&self, data: &PlayerRankData) {
        tracing::warn!(
            "Default rank: {:?}, {:?}, {:?}, {:?}",
            data.rank,
            data.monthly_package_rank,
            data.new_package_rank,
            data.package_rank
        );
    }
}

/// Turns player rank data into a color-coded chat prefix
#[derive(Clone)]
pub struct PrefixDeriver {
    observer: Arc<dyn RankObserver>,
}

impl PrefixDeriver {
    pub fn new(observer: Arc<dyn RankObserver>) -> Self {
        Self { observer }
    }

    /// Never fails: unmatched data yields [`DEFAULT_PREFIX`] and notifies the observer
    pub fn derive(&self, data: &PlayerRankData) -> String {
        match matching_rule(data) {
            Some(rule) => rule.format(data),
            None => {
                self.observer.unrecognized_rank(data);
                DEFAULT_PREFIX.to_string()
            }
        }
    }
}

impl Default for PrefixDeriver {
    fn default() -> Self {
        Self::new(Arc::new(TracingRankObserver))
    }
}

impl std::fmt::Debug for PrefixDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixDeriver")
            .field("rules", &PREFIX_RULES.len())
            .finish()
    }
}
