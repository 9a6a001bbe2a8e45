//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`OncoTreeError`] via `From`.

use crate::id::MainTypeId;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum OncoTreeError {
    /// A domain invariant or an input check failed.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed for a reason other than absence.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a value fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid main type id: {0:?}")]
    InvalidId(String),

    #[error("duplicate main type id: {0}")]
    DuplicateId(MainTypeId),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
