//! Server configuration loaded from environment variables.

/// The shared admin credentials for the cookie gate.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the admin credentials have defaults suitable for
/// local development. Credentials are presence-checked only; a deployment
/// without them still boots but every login returns a configuration error.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Store connection string.
    pub mongodb_uri: String,
    /// Database holding the five platform collections.
    pub mongodb_database: String,
    /// Present only when both credential variables are set.
    pub admin: Option<AdminCredentials>,
    /// Enables the `Secure` attribute on the session cookie.
    pub production: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `MONGODB_URI`          | `mongodb://localhost:27017` |
    /// | `MONGODB_DATABASE`     | `hyperconstructor_core`     |
    /// | `ADMIN_USERNAME`       | (unset)                     |
    /// | `ADMIN_PASSWORD`       | (unset)                     |
    /// | `ENVIRONMENT`          | `development`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let mongodb_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".into());

        let mongodb_database = std::env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "hyperconstructor_core".into());

        let admin = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(AdminCredentials { username, password }),
            _ => None,
        };

        let production = std::env::var("ENVIRONMENT")
            .map(|v| v == "production")
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            mongodb_uri,
            mongodb_database,
            admin,
            production,
        }
    }
}
