//! Report menu entries.

use std::fmt::{Display, Formatter};

/// One numbered entry of the report menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AcceptedPapers,
    AssignedPapers,
    InconsistentPapers,
    DiffScoreReviewers,
    Exit,
}

impl MenuOption {
    /// All entries in display order.
    pub const ALL: [MenuOption; 5] = [
        Self::AcceptedPapers,
        Self::AssignedPapers,
        Self::InconsistentPapers,
        Self::DiffScoreReviewers,
        Self::Exit,
    ];

    /// Maps an entered number to its entry; `None` outside `1..=5`.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::AcceptedPapers),
            2 => Some(Self::AssignedPapers),
            3 => Some(Self::InconsistentPapers),
            4 => Some(Self::DiffScoreReviewers),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::AcceptedPapers => 1,
            Self::AssignedPapers => 2,
            Self::InconsistentPapers => 3,
            Self::DiffScoreReviewers => 4,
            Self::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AcceptedPapers => "Find accepted papers",
            Self::AssignedPapers => "Find papers assigned for review",
            Self::InconsistentPapers => "Find papers with inconsistent reviews",
            Self::DiffScoreReviewers => "Find papers according to difference score",
            Self::Exit => "Exit",
        }
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
