//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open the review database file without creating it.
//! - Configure connection pragmas and check the base relations.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections expose `papers`, `reviews` and `users`.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

/// Base relations every report reads from.
pub const REQUIRED_TABLES: &[&str] = &["papers", "reviews", "users"];

/// Opens an existing review database file read/write.
///
/// # Errors
/// - `DbError::MissingFile` when `path` does not exist.
/// - `DbError::MissingTable` when a base relation is absent.
/// - `DbError::Sqlite` for any other SQLite failure.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start path={}", path.display());

    if !path.exists() {
        error!(
            "event=db_open module=db status=error duration_ms={} error_code=db_missing_file",
            started_at.elapsed().as_millis()
        );
        return Err(DbError::MissingFile(path.to_path_buf()));
    }

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Checks that every base relation exists on `conn`.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    for &table in REQUIRED_TABLES {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type IN ('table', 'view') AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(DbError::MissingTable(table));
        }
    }
    Ok(())
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    verify_schema(conn)?;
    Ok(())
}
