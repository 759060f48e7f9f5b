//! Handlers for the `/users` views: roster listing and per-user rollup.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use hyperadmin_core::error::CoreError;
use hyperadmin_core::models::project::ProjectResponse;
use hyperadmin_core::models::run::RunResponse;
use hyperadmin_core::models::schedule::ScheduleResponse;
use hyperadmin_core::models::user::UserResponse;
use hyperadmin_core::models::workflow::WorkflowResponse;
use hyperadmin_core::rollup::RollupStatsResponse;
use hyperadmin_db::repositories::RollupRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One roster row: the user plus summary counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    #[serde(flatten)]
    pub user: UserResponse,
    pub project_count: u64,
    pub workflow_count: u64,
    pub run_count: u64,
}

/// Full rollup for one user.
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
    pub projects: Vec<ProjectResponse>,
    pub workflows: Vec<WorkflowResponse>,
    pub schedules: Vec<ScheduleResponse>,
    /// Capped to the 100 most recently started; the rollup's
    /// `totalExecutions` counter is the authoritative total.
    pub runs: Vec<RunResponse>,
    pub stats: RollupStatsResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /users
///
/// Roster with per-user summary counts (the bulk rollup variant).
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<UserListItem>>>> {
    let rows = RollupRepo::users_with_basic_stats(&state.store, params.limit, params.offset)
        .await?;

    let items = rows
        .into_iter()
        .map(|row| UserListItem {
            user: UserResponse::from(row.user),
            project_count: row.project_count,
            workflow_count: row.workflow_count,
            run_count: row.run_count,
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /users/{id}
///
/// Full rollup for one user. An id that matches under neither encoding is
/// a typed not-found, which the page layer renders as an empty state.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<UserDetailResponse>>> {
    let rolled = RollupRepo::user_with_relations(&state.store, &id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id,
        })?;

    let data = UserDetailResponse {
        user: UserResponse::from(rolled.user),
        projects: rolled.projects.into_iter().map(ProjectResponse::from).collect(),
        workflows: rolled
            .workflows
            .into_iter()
            .map(WorkflowResponse::from)
            .collect(),
        schedules: rolled
            .schedules
            .into_iter()
            .map(ScheduleResponse::from)
            .collect(),
        runs: rolled.runs.into_iter().map(RunResponse::from).collect(),
        stats: RollupStatsResponse::from(rolled.stats),
    };

    Ok(Json(DataResponse { data }))
}
