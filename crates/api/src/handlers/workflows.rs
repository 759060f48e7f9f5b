//! Handlers for the `/workflows` views.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use hyperadmin_core::error::CoreError;
use hyperadmin_core::graph::{self, FlowGraph};
use hyperadmin_core::models::workflow::WorkflowResponse;
use hyperadmin_db::repositories::WorkflowRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One listing row: workflow summary plus its compact preview graph.
#[derive(Debug, Serialize)]
pub struct WorkflowListItem {
    #[serde(flatten)]
    pub workflow: WorkflowResponse,
    pub preview: FlowGraph,
}

/// Workflow detail with both graph projections.
#[derive(Debug, Serialize)]
pub struct WorkflowDetailResponse {
    pub workflow: WorkflowResponse,
    /// Full-detail projection (labels, config payloads, port selectors).
    pub graph: FlowGraph,
    /// Compact preview projection (icons, per-type colors).
    pub preview: FlowGraph,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /workflows
///
/// Workflow listing, most recently created first, each row carrying its
/// compact preview.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<WorkflowListItem>>>> {
    let workflows = WorkflowRepo::list(&state.store, params.limit, params.offset).await?;

    let items = workflows
        .into_iter()
        .map(|workflow| {
            let preview = graph::project_preview(&workflow);
            WorkflowListItem {
                workflow: WorkflowResponse::from(workflow),
                preview,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /workflows/{id}
///
/// Workflow detail with both graph projections. The id resolves under
/// either encoding; a miss under both is a typed not-found.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<WorkflowDetailResponse>>> {
    let workflow = WorkflowRepo::find_by_id(&state.store, &id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "workflow",
            id,
        })?;

    let data = WorkflowDetailResponse {
        graph: graph::project_detail(&workflow),
        preview: graph::project_preview(&workflow),
        workflow: WorkflowResponse::from(workflow),
    };

    Ok(Json(DataResponse { data }))
}
