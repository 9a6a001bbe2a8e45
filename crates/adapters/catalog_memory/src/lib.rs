//! # oncotree-adapter-catalog-memory
//!
//! In-memory catalog adapter for main types.
//!
//! ## Responsibilities
//! - Implement the `MainTypeRepository` port defined in `oncotree-app::ports::storage`
//! - Load the catalog once from a JSON data file at startup
//! - Enforce catalog invariants on load (valid records, unique ids)
//! - Serve lookups from an immutable snapshot with no locking
//!
//! ## Dependency rule
//! Depends on `oncotree-app` (for port traits) and `oncotree-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod loader;
pub mod main_type_repo;

pub use error::CatalogError;
pub use loader::Config;
pub use main_type_repo::InMemoryMainTypeRepository;
