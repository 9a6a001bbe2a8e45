//! In-memory implementation of [`MainTypeRepository`].

use std::collections::HashMap;
use std::future::Future;

use oncotree_app::ports::MainTypeRepository;
use oncotree_domain::error::{OncoTreeError, ValidationError};
use oncotree_domain::id::MainTypeId;
use oncotree_domain::main_type::MainType;

/// Immutable main type catalog.
///
/// Records keep their load order in `items`; `index` maps each id to its
/// position so lookups don't scan.
#[derive(Debug, Default)]
pub struct InMemoryMainTypeRepository {
    items: Vec<MainType>,
    index: HashMap<MainTypeId, usize>,
}

impl InMemoryMainTypeRepository {
    /// Build a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`OncoTreeError::Validation`] if any record is invalid or two
    /// records share an id.
    pub fn new(items: Vec<MainType>) -> Result<Self, OncoTreeError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if index.insert(item.id, position).is_some() {
                return Err(ValidationError::DuplicateId(item.id).into());
            }
        }
        Ok(Self { items, index })
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MainTypeRepository for InMemoryMainTypeRepository {
    fn get_by_id(
        &self,
        id: MainTypeId,
    ) -> impl Future<Output = Result<Option<MainType>, OncoTreeError>> + Send {
        let result = self
            .index
            .get(&id)
            .and_then(|&position| self.items.get(position))
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<MainType>, OncoTreeError>> + Send {
        let result = self.items.clone();
        async { Ok(result) }
    }
}
