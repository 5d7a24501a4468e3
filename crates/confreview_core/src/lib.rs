//! Core report logic for the conference review database.
//! Owns input validation, report queries and the menu session loop.

pub mod config;
pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use input::{Console, InputError, MenuOption};
pub use logging::{default_log_level, init_logging};
pub use model::paper::{Decision, DiffScore, PaperId, PaperSummary};
pub use model::user::ReviewerContact;
pub use repo::report_repo::{
    RepoError, RepoResult, ReportOutcome, ReportRepository, SqliteReportRepository,
};
pub use service::report_service::ReportService;
pub use session::{Session, SessionError, SessionState};
