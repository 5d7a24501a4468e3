//! SQLite storage bootstrap for the review database.
//!
//! # Responsibility
//! - Open an existing review database file for reports.
//! - Verify the base relations before any report runs.
//!
//! # Invariants
//! - The tool never creates the database file or its base tables.
//! - Report code must not run against a connection that failed verification.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;

pub use open::{open_db, verify_schema, REQUIRED_TABLES};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Database file does not exist at the configured path.
    MissingFile(PathBuf),
    /// One of the base relations is absent.
    MissingTable(&'static str),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingFile(path) => {
                write!(f, "database file `{}` does not exist", path.display())
            }
            Self::MissingTable(name) => write!(f, "required table `{name}` is missing"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingFile(_) | Self::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
