//! Typed error enum for the service layer.
//!
//! Unifies collaborator and storage failures into a single error type so
//! handlers can match on failure modes instead of downcasting.

use entityinfo_storage::StorageError;
use entityinfo_upstream::UpstreamError;
use thiserror::Error;

/// Service-layer error unifying upstream and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A collaborator call failed or reported a missing record.
    #[error("upstream: {0}")]
    Upstream(#[from] UpstreamError),

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (malformed date, empty update).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A locally stored record does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
}

impl ServiceError {
    /// Whether this error represents a not-found condition, local or upstream.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Upstream(e) => e.is_not_found(),
            Self::Storage(e) => e.is_not_found(),
            Self::InvalidInput(_) => false,
        }
    }
}
