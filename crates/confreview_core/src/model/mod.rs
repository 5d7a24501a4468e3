//! Read models for the review database.
//!
//! # Responsibility
//! - Define typed rows produced by the report queries.
//! - Keep stored code mappings (decision letters) in one place.
//!
//! # Invariants
//! - Models are read-only projections; the tool never writes base relations.

pub mod paper;
pub mod user;
