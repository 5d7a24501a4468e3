//! Line-oriented operator input.
//!
//! # Responsibility
//! - Read menu choices, emails, area codes and thresholds from a reader.
//! - Recover from malformed input locally by re-prompting.
//!
//! # Invariants
//! - Readers only return values that passed validation.
//! - End of input is the only condition surfaced besides I/O failure.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::MenuOption;

pub type InputResult<T> = Result<T, InputError>;

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    /// Reader reached end of input before a valid value was entered.
    Closed,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Closed => write!(f, "input closed"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
