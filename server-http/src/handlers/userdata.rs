use crate::models::UserDataQuery;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
};
use tracing::{debug, error, info};

/// GET /userdata?uuid=<player>&server=<hostname>
///
/// Plain-text rank prefix. Empty body for servers outside the network,
/// 400 for a malformed uuid or missing server, 500 when the store fails.
pub async fn get_userdata(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<String, StatusCode> {
    let Query(pairs) = pairs.map_err(|e| {
        debug!("Rejected /userdata query string: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    let query = UserDataQuery::from_pairs(pairs);
    info!("GET /userdata: uuid={:?}, server={:?}", query.uuid, query.server);

    match state
        .prefix_service
        .prefix_for(query.uuid.as_deref(), query.server.as_deref())
        .await
    {
        Ok(prefix) => Ok(prefix),
        Err(e) if e.is_validation() => {
            debug!("Rejected /userdata request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            error!("Failed to resolve prefix: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Any unknown path or method
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
