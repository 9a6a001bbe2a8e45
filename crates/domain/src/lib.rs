//! # oncotree-domain
//!
//! Pure domain model for the oncotree main-types service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Main types** (top-level tumor classifications)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod main_type;
