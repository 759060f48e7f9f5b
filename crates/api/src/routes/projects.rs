//! Route definition for the `/projects` listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(projects::list))
}
