use std::sync::Arc;

use hyperadmin_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the store handle shares the driver's connection pool
/// and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the document store.
    pub store: Store,
    /// Server configuration (credentials, cookie attributes).
    pub config: Arc<ServerConfig>,
}
