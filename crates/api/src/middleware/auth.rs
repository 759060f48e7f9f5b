//! Cookie-gate middleware for the dashboard views.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::cookie;

/// Require the admin session cookie.
///
/// Applied to every dashboard view; the login exchange, the login view
/// itself, and the health endpoint stay outside. Absence or mismatch
/// redirects to the login view rather than erroring: an expired session
/// is a normal state, not a failure.
pub async fn require_admin(jar: CookieJar, request: Request, next: Next) -> Response {
    if cookie::is_authenticated(&jar) {
        return next.run(request).await;
    }
    Redirect::to("/login").into_response()
}
