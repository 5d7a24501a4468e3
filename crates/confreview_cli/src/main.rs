//! Interactive report menu over the conference review database.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Boot logging and storage, run one session on stdin/stdout, then close
//!   the database connection.

use clap::Parser;
use confreview_core::db::open_db;
use confreview_core::{
    init_logging, AppConfig, Console, ReportService, Session, SqliteReportRepository,
};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "confreview",
    version,
    about = "Run fixed review reports against a conference SQLite database"
)]
struct Cli {
    /// Path to the review database file
    #[arg(long, env = "CONFREVIEW_DB")]
    db: Option<PathBuf>,

    /// Domain suffix every reviewer email must end with
    #[arg(long, env = "CONFREVIEW_EMAIL_DOMAIN")]
    email_domain: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CONFREVIEW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, env = "CONFREVIEW_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("confreview: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(cli)?;
    config.validate().map_err(|err| err.to_string())?;
    init_logging(&config.log_level, &config.log_dir)?;

    let mut conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "cannot open database `{}`: {err}",
            config.db_path.display()
        )
    })?;

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout(), config.email_domain.as_str());
    let service = ReportService::new(SqliteReportRepository::new(&mut conn));
    let mut session = Session::new(service, console);
    let outcome = session.run().map_err(|err| err.to_string());
    drop(session);

    if let Err((_, err)) = conn.close() {
        error!("event=db_close module=cli status=error error={}", err);
        return Err(format!("failed to close database: {err}"));
    }
    info!("event=db_close module=cli status=ok");
    outcome
}

fn resolve_config(cli: Cli) -> Result<AppConfig, String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?;
    let mut config = AppConfig::with_base_dir(&cwd);

    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(domain) = cli.email_domain {
        config.email_domain = domain.trim().to_string();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.log_dir = if dir.is_absolute() { dir } else { cwd.join(dir) };
    }
    Ok(config)
}
