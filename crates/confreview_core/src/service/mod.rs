//! Core use-case services.
//!
//! # Responsibility
//! - Wrap repository calls into the report entry points the session uses.
//! - Keep the session loop decoupled from storage details.

pub mod report_service;
