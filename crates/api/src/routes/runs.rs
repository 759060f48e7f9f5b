//! Route definition for the `/runs` listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::runs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/runs", get(runs::list))
}
