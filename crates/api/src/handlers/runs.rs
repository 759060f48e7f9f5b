//! Handler for the `/runs` listing.

use axum::extract::{Query, State};
use axum::Json;

use hyperadmin_core::models::run::RunResponse;
use hyperadmin_db::repositories::RunRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /runs
///
/// Run listing, most recently started first, logs included.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<RunResponse>>>> {
    let runs = RunRepo::list(&state.store, params.limit, params.offset).await?;
    let items = runs.into_iter().map(RunResponse::from).collect();
    Ok(Json(DataResponse { data: items }))
}
