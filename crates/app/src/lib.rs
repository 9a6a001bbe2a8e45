//! # oncotree-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `MainTypeRepository` — read-only lookup of main types
//! - Define **driving/inbound ports** as use-case structs:
//!   - `MainTypeService` — list, get
//! - Orchestrate domain objects without knowing *how* the data is stored
//!
//! ## Dependency rule
//! Depends on `oncotree-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
