use crate::TtlMs;
use tracing::warn;

pub enum StoreBackend {
    Memory(Option<u64>), // max entries
    Sled(String),        // data_dir
}

pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub hypixel_api_key: String,
    pub hypixel_api_url: String,
    pub store: StoreBackend,
    pub success_ttl: TtlMs,
    pub failure_ttl: TtlMs,
    pub upstream_timeout_ms: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_HTTP_PORT: u16 = 8787;
    const DEFAULT_API_URL: &str = "https://api.hypixel.net";
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_SUCCESS_TTL: TtlMs = TtlMs::from_days(7);
    const DEFAULT_FAILURE_TTL: TtlMs = TtlMs::from_hours(12);
    const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u64 = |name: &str, default: u64| {
            var(name)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let hypixel_api_key = var("HYPIXEL_API_KEY").unwrap_or_else(|| {
            warn!("HYPIXEL_API_KEY not set, upstream requests will be rejected");
            String::new()
        });

        let store = match var("RANKPREFIX_STORE")
            .unwrap_or_else(|| "sled".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory(
                var("RANKPREFIX_MAX_ENTRIES").and_then(|v| v.trim().parse::<u64>().ok()),
            ),
            other => {
                if other != "sled" {
                    warn!("Unknown RANKPREFIX_STORE '{}', falling back to sled", other);
                }
                StoreBackend::Sled(
                    var("RANKPREFIX_DATA_DIR").unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string()),
                )
            }
        };

        let success_ttl = TtlMs(parse_u64("RANKPREFIX_SUCCESS_TTL_MS", Self::DEFAULT_SUCCESS_TTL.0));
        let failure_ttl = TtlMs(parse_u64("RANKPREFIX_FAILURE_TTL_MS", Self::DEFAULT_FAILURE_TTL.0));
        if failure_ttl.0 >= success_ttl.0 {
            warn!(
                "Failure TTL ({} ms) is not shorter than success TTL ({} ms)",
                failure_ttl.0, success_ttl.0
            );
        }

        Self {
            host: var("RANKPREFIX_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            http_port: var("RANKPREFIX_HTTP_PORT")
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(Self::DEFAULT_HTTP_PORT),
            hypixel_api_key,
            hypixel_api_url: var("HYPIXEL_API_URL")
                .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            store,
            success_ttl,
            failure_ttl,
            upstream_timeout_ms: parse_u64(
                "RANKPREFIX_UPSTREAM_TIMEOUT_MS",
                Self::DEFAULT_UPSTREAM_TIMEOUT_MS,
            ),
            allowed_origins: var("RANKPREFIX_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl StoreBackend {
    pub fn name(&self) -> &str {
        match self {
            StoreBackend::Memory(..) => "memory",
            StoreBackend::Sled(..) => "sled",
        }
    }
}
