//! Main type service — read-only use-cases over the catalog.

use oncotree_domain::error::{NotFoundError, OncoTreeError};
use oncotree_domain::id::MainTypeId;
use oncotree_domain::main_type::MainType;

use crate::ports::MainTypeRepository;

/// Application service for main type lookups.
pub struct MainTypeService<R> {
    repo: R,
}

impl<R: MainTypeRepository> MainTypeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a main type by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`OncoTreeError::NotFound`] when no main type with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_main_type(&self, id: MainTypeId) -> Result<MainType, OncoTreeError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(%id, "main type not found");
            NotFoundError {
                entity: "MainType",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all main types in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_main_types(&self) -> Result<Vec<MainType>, OncoTreeError> {
        self.repo.get_all().await
    }
}
