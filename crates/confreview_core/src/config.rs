//! Runtime configuration for a report session.
//!
//! # Responsibility
//! - Hold database, email-domain and logging settings with defaults.
//! - Validate settings before storage or logging are touched.
//!
//! # Invariants
//! - `email_domain` starts with `@`, has at least one character after it and
//!   contains no whitespace, so console matching sees exactly the validated value.
//! - `log_dir` is absolute after `AppConfig::validate` succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Database file opened when no path is configured.
pub const DEFAULT_DB_PATH: &str = "./A3.db";
/// Suffix every reviewer email must carry.
pub const DEFAULT_EMAIL_DOMAIN: &str = "@Email";
/// Log directory used when none is configured, relative to the working dir.
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEmailDomain(String),
    RelativeLogDir(PathBuf),
    EmptyDbPath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmailDomain(value) => write!(
                f,
                "email domain `{value}` must start with `@` followed by a domain name"
            ),
            Self::RelativeLogDir(path) => {
                write!(f, "log dir must be an absolute path, got `{}`", path.display())
            }
            Self::EmptyDbPath => write!(f, "database path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Settings for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub email_domain: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Builds a config with defaults, resolving the log dir against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: base_dir.into().join(DEFAULT_LOG_DIR),
        }
    }

    /// Checks invariants that the rest of startup relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        let domain = self.email_domain.as_str();
        if domain.len() < 2 || !domain.starts_with('@') || domain.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidEmailDomain(self.email_domain.clone()));
        }
        if !self.log_dir.is_absolute() {
            return Err(ConfigError::RelativeLogDir(self.log_dir.clone()));
        }
        Ok(())
    }
}
