//! Shared helpers for HTTP-level integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderName, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use hyperadmin_api::config::{AdminCredentials, ServerConfig};
use hyperadmin_api::routes;
use hyperadmin_api::state::AppState;
use hyperadmin_db::Store;

/// Test admin credentials.
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "test-password-123";

/// A store URI that fails fast instead of hanging when no server listens.
/// Used by tests that never expect a successful read.
pub const UNREACHABLE_STORE_URI: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=100&connectTimeoutMS=100";

/// Build a test `ServerConfig` with safe defaults and credentials set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongodb_uri: UNREACHABLE_STORE_URI.to_string(),
        mongodb_database: "hyperadmin_test".to_string(),
        admin: Some(AdminCredentials {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
        production: false,
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(store: Store, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::app_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// App wired to a store that is guaranteed unreachable (fast failure).
pub async fn build_unreachable_app() -> Router {
    let config = test_config();
    let store = Store::connect(&config.mongodb_uri, &config.mongodb_database)
        .await
        .expect("test URI must parse");
    build_test_app(store, config)
}

/// Issue a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request with a `Cookie` header.
pub async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
