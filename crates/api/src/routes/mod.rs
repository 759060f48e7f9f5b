pub mod auth;
pub mod health;
pub mod projects;
pub mod runs;
pub mod schedules;
pub mod stats;
pub mod users;
pub mod workflows;

use axum::Router;

use crate::middleware;
use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      service + store health (public)
/// /login                       login view placeholder (public)
/// /api/auth/login              shared-password login (public)
/// /api/auth/logout             clear the session cookie (public)
///
/// /                            dashboard statistics       (cookie-gated)
/// /users                       roster with basic counts   (cookie-gated)
/// /users/{id}                  full per-user rollup       (cookie-gated)
/// /projects                    project listing            (cookie-gated)
/// /workflows                   workflow listing           (cookie-gated)
/// /workflows/{id}              workflow detail + graphs   (cookie-gated)
/// /schedules                   schedule listing           (cookie-gated)
/// /runs                        run listing                (cookie-gated)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(dashboard_routes())
}

/// The cookie-gated dashboard views.
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .merge(stats::router())
        .merge(users::router())
        .merge(projects::router())
        .merge(workflows::router())
        .merge(schedules::router())
        .merge(runs::router())
        .layer(axum::middleware::from_fn(middleware::auth::require_admin))
}
