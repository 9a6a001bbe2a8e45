//! Storage port — repository traits for looking up catalog records.

use std::future::Future;

use oncotree_domain::error::OncoTreeError;
use oncotree_domain::id::MainTypeId;
use oncotree_domain::main_type::MainType;

/// Read-only access to the main-type catalog.
///
/// Implementations must return records from [`get_all`](Self::get_all) in
/// the insertion order of their backing source.
pub trait MainTypeRepository {
    /// Fetch the record with the given id, or `None` if absent.
    fn get_by_id(
        &self,
        id: MainTypeId,
    ) -> impl Future<Output = Result<Option<MainType>, OncoTreeError>> + Send;

    /// Fetch every record. An empty catalog is not an error.
    fn get_all(&self) -> impl Future<Output = Result<Vec<MainType>, OncoTreeError>> + Send;
}
