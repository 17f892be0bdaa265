use crate::domain::SubjectKey;
use crate::prefix::PrefixDeriver;
use crate::resolver::CacheResolver;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{Error, Result};

/// Canonical hostname of the only network served
pub const HYPIXEL_NETWORK: &str = "hypixel.net";

const PLAYER_ID_LEN: usize = 36;

/// Dashed 8-4-4-4-12 player id made of ASCII word characters
static PLAYER_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\w){8}-(?-u:\w){4}-(?-u:\w){4}-(?-u:\w){4}-(?-u:\w){12}$")
        .expect("Invalid PLAYER_ID_RE regex")
});

pub fn validate_player_id(player_id: Option<&str>) -> Result<&str> {
    match player_id {
        Some(id) if id.len() == PLAYER_ID_LEN && PLAYER_ID_RE.is_match(id) => Ok(id),
        Some(id) => Err(Error::InvalidPlayerId(id.to_string())),
        None => Err(Error::InvalidPlayerId(String::new())),
    }
}

pub fn validate_server(server: Option<&str>) -> Result<&str> {
    match server {
        Some(host) if !host.is_empty() => Ok(host),
        _ => Err(Error::MissingServer),
    }
}

/// Canonical network for a hostname, if it is one we serve
pub fn network_for(server: &str) -> Option<&'static str> {
    if server == HYPIXEL_NETWORK || server.ends_with(".hypixel.net") {
        Some(HYPIXEL_NETWORK)
    } else {
        None
    }
}

/// Player + server → display prefix
#[derive(Clone, Debug)]
pub struct PrefixService {
    resolver: CacheResolver,
    deriver: PrefixDeriver,
}

impl PrefixService {
    pub fn new(resolver: CacheResolver, deriver: PrefixDeriver) -> Self {
        Self { resolver, deriver }
    }

    /// Validation errors are returned before any store or upstream call.
    /// Servers outside the network yield an empty prefix.
    pub async fn prefix_for(&self, player_id: Option<&str>, server: Option<&str>) -> Result<String> {
        let player_id = validate_player_id(player_id)?;
        let server = validate_server(server)?;

        let Some(network) = network_for(server) else {
            tracing::debug!("Ignoring unsupported server '{}'", server);
            return Ok(String::new());
        };

        let data = self
            .resolver
            .resolve(&SubjectKey::new(player_id, network))
            .await?;
        Ok(self.deriver.derive(&data))
    }
}
