//! Route definitions for the `/workflows` views.

use axum::routing::get;
use axum::Router;

use crate::handlers::workflows;
use crate::state::AppState;

/// Routes mounted at `/workflows`.
///
/// ```text
/// GET /workflows        -> listing with compact previews
/// GET /workflows/{id}   -> detail with both graph projections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workflows", get(workflows::list))
        .route("/workflows/{id}", get(workflows::detail))
}
