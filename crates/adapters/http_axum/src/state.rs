//! Shared application state for axum handlers.

use std::sync::Arc;

use oncotree_app::ports::MainTypeRepository;
use oncotree_app::services::main_type_service::MainTypeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Main type lookup service.
    pub main_type_service: Arc<MainTypeService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            main_type_service: Arc::clone(&self.main_type_service),
        }
    }
}

impl<R> AppState<R>
where
    R: MainTypeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(main_type_service: MainTypeService<R>) -> Self {
        Self {
            main_type_service: Arc::new(main_type_service),
        }
    }
}
