//! Handler for the `/schedules` listing.

use axum::extract::{Query, State};
use axum::Json;

use hyperadmin_core::models::schedule::ScheduleResponse;
use hyperadmin_db::repositories::ScheduleRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /schedules
///
/// Schedule listing, soonest `nextRunAt` first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<ScheduleResponse>>>> {
    let schedules = ScheduleRepo::list(&state.store, params.limit, params.offset).await?;
    let items = schedules.into_iter().map(ScheduleResponse::from).collect();
    Ok(Json(DataResponse { data: items }))
}
