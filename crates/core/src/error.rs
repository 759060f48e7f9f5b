//! Domain error type shared across the service crates.

use thiserror::Error;

/// Domain-level errors surfaced by the dashboard components.
///
/// The HTTP layer maps these onto status codes; see the API crate's
/// `AppError`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested entity matched under neither id encoding. Callers render
    /// this as an empty state, not a failure.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Credential mismatch at the session boundary.
    #[error("{0}")]
    Unauthorized(String),

    /// Required configuration is missing or unusable.
    #[error("{0}")]
    Configuration(String),

    /// Any other internal failure.
    #[error("{0}")]
    Internal(String),
}
