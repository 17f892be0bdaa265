//! Rank prefix resolution for Hypixel players.
//!
//! A [`query::PrefixService`] validates the request, resolves the player's
//! rank data through the cache-aside [`resolver::CacheResolver`] and turns it
//! into a chat prefix with [`prefix::PrefixDeriver`]. Storage, upstream and
//! time are reached through the traits in [`ports`].

pub mod clock;
pub mod domain;
pub mod ports;
pub mod prefix;
pub mod query;
pub mod resolver;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use domain::{CacheEntry, PlayerRankData, SubjectKey, UpstreamResult};
pub use query::PrefixService;
pub use resolver::{CacheResolver, RefreshPolicy};
