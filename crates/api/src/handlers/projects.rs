//! Handler for the `/projects` listing.

use axum::extract::{Query, State};
use axum::Json;

use hyperadmin_core::models::project::ProjectResponse;
use hyperadmin_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /projects
///
/// Project listing, most recently created first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectResponse>>>> {
    let projects = ProjectRepo::list(&state.store, params.limit, params.offset).await?;
    let items = projects.into_iter().map(ProjectResponse::from).collect();
    Ok(Json(DataResponse { data: items }))
}
