use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use roster_shared::GuildPayload;
use tracing::warn;

use crate::services::roster_loader::load_roster;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "source": state.source.as_ref().map(|source| source.kind()),
    }))
}

/// Serve the guild roster, re-validated against the shared payload shape.
pub async fn get_guild(State(state): State<AppState>) -> Result<Json<GuildPayload>, StatusCode> {
    let Some(source) = state.source.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match load_roster(&state.http_client, source).await {
        Ok(payload) => Ok(Json(payload)),
        Err(e) => {
            warn!(error = %e, source = source.kind(), "failed to load guild roster");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
