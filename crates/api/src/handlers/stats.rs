//! Handler for the dashboard home view.

use axum::extract::State;
use axum::Json;

use hyperadmin_core::stats::DatabaseStats;
use hyperadmin_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /
///
/// The full cross-collection counter set, recomputed on every request.
pub async fn database_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DatabaseStats>>> {
    let stats = StatsRepo::database_stats(&state.store).await?;
    Ok(Json(DataResponse { data: stats }))
}
