//! Route definitions for the `/users` views.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /users        -> roster with per-user summary counts
/// GET /users/{id}   -> full rollup for one user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/{id}", get(users::detail))
}
