//! Route definition for the `/schedules` listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedules;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/schedules", get(schedules::list))
}
