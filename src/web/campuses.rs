//! Campus directory handlers.

use axum::extract::State;
use axum::response::Json;
use tracing::{info, trace};

use crate::data::models::Campus;
use crate::state::AppState;
use crate::web::error::{ApiError, db_error};

/// `GET /api/campuses` — all operating campuses, as stored, in id order.
///
/// No filtering or pagination; the directory is small and changes rarely.
pub(super) async fn list_campuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Campus>>, ApiError> {
    info!("campus listing requested");

    let data = crate::data::campuses::list_actual(&state.db_pool)
        .await
        .map_err(|e| db_error("Campus listing", e))?;

    trace!(count = data.len(), "Listed campuses");

    Ok(Json(data))
}
