//! Repository layer for report queries.
//!
//! # Responsibility
//! - Define the report data-access contract.
//! - Isolate SQLite query details from the session loop.
//!
//! # Invariants
//! - Repository APIs return semantic outcomes (`NotFound`, `NoRecords`) in
//!   addition to DB transport errors.

pub mod report_repo;
