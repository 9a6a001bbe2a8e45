//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod main_types;

use axum::Router;
use axum::routing::get;

use oncotree_app::ports::MainTypeRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: MainTypeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/mainTypes", get(main_types::list::<R>))
        .route("/mainTypes/{id}", get(main_types::get::<R>))
}
