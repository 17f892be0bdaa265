use rankprefix::clock::SystemClock;
use rankprefix::prefix::PrefixDeriver;
use rankprefix::upstream::HypixelClient;
use rankprefix::{CacheResolver, PrefixService, RefreshPolicy};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub prefix_service: Arc<PrefixService>,
}

impl AppState {
    pub fn new(prefix_service: PrefixService) -> Self {
        Self {
            prefix_service: Arc::new(prefix_service),
        }
    }

    /// Wire the store, the Hypixel client and the resolver from configuration
    pub fn from_config(config: &Config) -> shared::Result<Self> {
        let store = storage_engine::open_store(&config.store)?;

        let source = Arc::new(HypixelClient::new(
            &config.hypixel_api_url,
            config.hypixel_api_key.clone(),
            Duration::from_millis(config.upstream_timeout_ms),
        )?);

        let policy = RefreshPolicy::new(config.success_ttl, config.failure_ttl);
        tracing::info!(
            "Refresh policy: success TTL {} ms, failure TTL {} ms",
            policy.success_ttl.0,
            policy.failure_ttl.0
        );

        let resolver = CacheResolver::new(store, source, Arc::new(SystemClock), policy);
        Ok(Self::new(PrefixService::new(resolver, PrefixDeriver::default())))
    }
}
