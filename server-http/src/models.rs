use serde::Serialize;

// === Rank Query Models ===

/// Query string of `GET /userdata`
#[derive(Debug, Default)]
pub struct UserDataQuery {
    pub uuid: Option<String>,
    pub server: Option<String>,
}

impl UserDataQuery {
    /// Build from raw query pairs; the first occurrence of a repeated key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "uuid" if query.uuid.is_none() => query.uuid = Some(value),
                "server" if query.server.is_none() => query.server = Some(value),
                _ => {}
            }
        }
        query
    }
}

// === Health Models ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}
