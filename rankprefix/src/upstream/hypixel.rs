//! HTTP adapter for the Hypixel public API.
//!
//! Only `GET /player` is used. The API answers with a JSON envelope
//! `{ "success": bool, "cause"?: string, "player"?: object | null }` for both
//! successful and rejected requests, so the envelope decides the outcome
//! rather than the HTTP status.

use crate::domain::{PlayerRankData, UpstreamResult};
use crate::ports::PlayerDataSource;
use async_trait::async_trait;
use serde::Deserialize;
use shared::{Error, Result};
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "API-Key";

/// Response envelope of `GET /player`
#[derive(Debug, Deserialize)]
struct PlayerResponse {
    success: bool,
    #[serde(default)]
    cause: Option<String>,
    #[serde(default)]
    player: Option<PlayerRankData>,
}

impl From<PlayerResponse> for UpstreamResult {
    fn from(response: PlayerResponse) -> Self {
        if response.success {
            // `player: null` means the player never joined: no rank at all
            UpstreamResult::Success(response.player.unwrap_or_default())
        } else {
            UpstreamResult::Failure(
                response
                    .cause
                    .unwrap_or_else(|| "request was not successful".to_string()),
            )
        }
    }
}

/// Client for the Hypixel player endpoint
pub struct HypixelClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HypixelClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rankprefix/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    async fn request_player(&self, player_id: &str) -> reqwest::Result<PlayerResponse> {
        let response = self
            .client
            .get(format!("{}/player", self.base_url))
            .query(&[("uuid", player_id)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        debug!("Hypixel answered {} for '{}'", response.status(), player_id);
        response.json().await
    }
}

#[async_trait]
impl PlayerDataSource for HypixelClient {
    async fn fetch_player(&self, player_id: &str) -> UpstreamResult {
        match self.request_player(player_id).await {
            Ok(response) => response.into(),
            Err(e) => UpstreamResult::Failure(e.to_string()),
        }
    }
}

impl std::fmt::Debug for HypixelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypixelClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    const PLAYER: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    /// Serve a fake `/player` endpoint on an ephemeral port and return its base URL
    async fn spawn_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> HypixelClient {
        HypixelClient::new(base_url, "test-key", Duration::from_secs(5)).unwrap()
    }

    async fn fake_player(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        if headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) != Some("test-key") {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "success": false, "cause": "Invalid API key" })),
            );
        }
        match params.get("uuid").map(String::as_str) {
            Some(PLAYER) => (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "player": {
                        "displayname": "Technoblade",
                        "newPackageRank": "MVP_PLUS",
                        "monthlyPackageRank": "SUPERSTAR",
                        "rankPlusColor": "BLACK",
                        "stats": {}
                    }
                })),
            ),
            _ => (StatusCode::OK, Json(json!({ "success": true, "player": null }))),
        }
    }

    #[test]
    fn test_envelope_mapping() {
        let ok: PlayerResponse =
            serde_json::from_str(r#"{"success":true,"player":{"rank":"ADMIN"}}"#).unwrap();
        assert_eq!(
            UpstreamResult::from(ok),
            UpstreamResult::Success(PlayerRankData {
                rank: Some("ADMIN".into()),
                ..Default::default()
            })
        );

        let unknown: PlayerResponse = serde_json::from_str(r#"{"success":true,"player":null}"#).unwrap();
        assert_eq!(UpstreamResult::from(unknown), UpstreamResult::Success(PlayerRankData::default()));

        let throttled: PlayerResponse =
            serde_json::from_str(r#"{"success":false,"cause":"Key throttle","throttle":true}"#).unwrap();
        assert_eq!(
            UpstreamResult::from(throttled),
            UpstreamResult::Failure("Key throttle".into())
        );
    }

    #[tokio::test]
    async fn test_fetch_player_success() {
        let base_url = spawn_api(Router::new().route("/player", get(fake_player))).await;

        let result = client(&base_url).fetch_player(PLAYER).await;

        let data = match result {
            UpstreamResult::Success(data) => data,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(data.new_package_rank.as_deref(), Some("MVP_PLUS"));
        assert_eq!(data.monthly_package_rank.as_deref(), Some("SUPERSTAR"));
        assert_eq!(data.rank_plus_color.as_deref(), Some("BLACK"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_player_is_empty_success() {
        let base_url = spawn_api(Router::new().route("/player", get(fake_player))).await;

        let result = client(&base_url)
            .fetch_player("00000000-0000-0000-0000-000000000000")
            .await;

        assert_eq!(result, UpstreamResult::Success(PlayerRankData::default()));
    }

    #[tokio::test]
    async fn test_rejected_key_is_failure() {
        let base_url = spawn_api(Router::new().route("/player", get(fake_player))).await;
        let client = HypixelClient::new(&base_url, "wrong", Duration::from_secs(5)).unwrap();

        let result = client.fetch_player(PLAYER).await;

        assert_eq!(result, UpstreamResult::Failure("Invalid API key".into()));
    }

    #[tokio::test]
    async fn test_non_json_body_is_failure() {
        let router = Router::new().route("/player", get(|| async { "<html>Bad Gateway</html>" }));
        let base_url = spawn_api(router).await;

        let result = client(&base_url).fetch_player(PLAYER).await;

        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_failure() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(&format!("http://{}", addr)).fetch_player(PLAYER).await;

        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let router = Router::new().route(
            "/player",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "success": true, "player": {} }))
            }),
        );
        let base_url = spawn_api(router).await;
        let client = HypixelClient::new(&base_url, "test-key", Duration::from_millis(100)).unwrap();

        let result = client.fetch_player(PLAYER).await;

        assert!(!result.is_success());
    }
}
