//! # oncotree-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **main types JSON API** (`/api/mainTypes`, `/api/mainTypes/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Wrap every result in the `{meta, data}` envelope
//! - Translate domain errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `oncotree-app` (for port traits and services) and `oncotree-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;
