//! Handlers for the session boundary (login, logout, login view).

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use hyperadmin_core::error::CoreError;

use crate::auth::cookie;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for the two session endpoints.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Compare against the configured admin credentials and set the session
/// cookie on success. Missing credential configuration is a server error,
/// not an authentication failure.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    let Some(admin) = state.config.admin.as_ref() else {
        return Err(AppError::Core(CoreError::Configuration(
            "ADMIN_USERNAME or ADMIN_PASSWORD is not set".into(),
        )));
    };

    if input.username != admin.username || input.password != admin.password {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    tracing::info!("admin session opened");

    let jar = jar.add(cookie::session_cookie(state.config.production));
    Ok((jar, Json(SessionResponse { success: true })))
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Always succeeds, cookie or not.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    tracing::info!("admin session closed");

    let jar = jar.add(cookie::removal_cookie(state.config.production));
    (jar, Json(SessionResponse { success: true }))
}

/// GET /login
///
/// Placeholder for the login view; unauthenticated dashboard requests are
/// redirected here.
pub async fn login_view() -> Html<&'static str> {
    Html(
        "<!doctype html><title>Admin login</title>\
         <p>POST /api/auth/login with {\"username\", \"password\"}.</p>",
    )
}
