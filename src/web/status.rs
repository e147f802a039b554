//! Health and status handlers.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::trace;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum DatabaseStatus {
    Connected,
    Error,
}

#[derive(Serialize)]
pub struct StatusResponse {
    version: String,
    commit: String,
    database: DatabaseStatus,
}

/// Health check endpoint
pub(super) async fn health() -> Json<Value> {
    trace!("health check requested");
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Status endpoint showing build and database state
pub(super) async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let database = match crate::data::health::ping(&state.db_pool).await {
        Ok(()) => DatabaseStatus::Connected,
        Err(e) => {
            tracing::warn!(error = ?e, "Status probe could not reach the database");
            DatabaseStatus::Error
        }
    };

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: env!("GIT_COMMIT_HASH").to_string(),
        database,
    })
}
