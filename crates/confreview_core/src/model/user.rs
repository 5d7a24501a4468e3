//! User-side rows returned by reports.

use serde::{Deserialize, Serialize};

/// Reviewer identity as printed by the score-difference report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerContact {
    /// Primary key of `users`; always carries the configured domain suffix.
    pub email: String,
    pub name: String,
}
