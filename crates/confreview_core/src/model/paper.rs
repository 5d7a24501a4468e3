//! Paper and derived score models.
//!
//! # Responsibility
//! - Define the paper-side rows returned by reports.
//! - Map paper decisions to and from their stored single-letter codes.
//!
//! # Invariants
//! - `Decision::from_db_code` never fails; unknown codes read as pending.
//! - `DiffScore::diff` is non-negative.

use serde::{Deserialize, Serialize};

/// Integer key of a row in `papers`.
pub type PaperId = i64;

/// Review outcome recorded on a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Rejected,
    /// No decision recorded yet.
    Pending,
}

impl Decision {
    /// Returns the code stored in `papers.decision`.
    pub fn as_db_code(self) -> &'static str {
        match self {
            Self::Accepted => "A",
            Self::Rejected => "R",
            Self::Pending => "P",
        }
    }

    /// Parses a stored decision code.
    pub fn from_db_code(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("A") => Self::Accepted,
            Some("R") => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

/// Identifier and title pair, as listed by the inconsistency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub id: PaperId,
    pub title: String,
}

/// Distance between a paper's mean score and its area's mean score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffScore {
    pub paper_id: PaperId,
    pub title: String,
    pub diff: f64,
}
