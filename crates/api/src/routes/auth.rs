//! Route definitions for the session boundary.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes, all outside the cookie gate.
///
/// ```text
/// POST /api/auth/login   -> login
/// POST /api/auth/logout  -> logout
/// GET  /login            -> login_view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/login", get(auth::login_view))
}
