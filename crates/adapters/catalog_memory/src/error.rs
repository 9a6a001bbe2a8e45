//! Catalog-specific error type wrapping load failures.

use oncotree_domain::error::OncoTreeError;

/// Errors originating from loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    /// The data file is not a JSON array of main types.
    #[error("failed to parse catalog file")]
    Json(#[from] serde_json::Error),

    /// A record broke a domain invariant.
    #[error("invalid catalog record")]
    Invalid(#[source] OncoTreeError),
}

impl From<CatalogError> for OncoTreeError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Invalid(inner) => inner,
            other => Self::Storage(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncotree_domain::error::ValidationError;

    #[test]
    fn should_unwrap_invalid_record_into_domain_error() {
        let err = CatalogError::Invalid(ValidationError::EmptyName.into());
        assert!(matches!(
            OncoTreeError::from(err),
            OncoTreeError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_map_io_failure_to_storage_error() {
        let err = CatalogError::Io(std::io::Error::other("boom"));
        assert!(matches!(OncoTreeError::from(err), OncoTreeError::Storage(_)));
    }
}
