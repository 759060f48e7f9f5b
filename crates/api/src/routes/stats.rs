//! Route definition for the dashboard home view.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// The dashboard home, mounted at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::database_stats))
}
