//! Report repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Own every SQL statement the report menu runs.
//! - Shape raw rows into typed outcomes that separate "entity missing" from
//!   "entity present but nothing related".
//!
//! # Invariants
//! - Reports never modify base relations.
//! - The score-difference table lives in the `temp` schema only and is
//!   rebuilt inside a committed transaction before each read.
//! - Row ordering is deterministic for every report.

use crate::db::DbError;
use crate::model::paper::{Decision, DiffScore, PaperSummary};
use crate::model::user::ReviewerContact;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DIFF_SCORE_REBUILD_SQL: &str = "
DROP TABLE IF EXISTS temp.diff_score;
CREATE TEMP TABLE diff_score AS
SELECT
    p.id AS pid,
    p.title AS ptitle,
    ABS(paper_avg.avg_paper - area_avg.avg_area) AS diff
FROM papers p
JOIN (
    SELECT r.paper AS rp, AVG(r.overall) AS avg_paper
    FROM reviews r
    GROUP BY r.paper
) paper_avg ON paper_avg.rp = p.id
JOIN (
    SELECT p2.area AS pa, AVG(r2.overall) AS avg_area
    FROM reviews r2
    JOIN papers p2 ON p2.id = r2.paper
    GROUP BY p2.area
) area_avg ON area_avg.pa = p.area;
";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for report queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a report keyed on one entity (an area or a reviewer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome<T> {
    /// The entity itself does not exist.
    NotFound,
    /// The entity exists but has no related rows.
    NoRecords,
    /// Related rows, in report order. Never empty.
    Rows(Vec<T>),
}

impl<T> ReportOutcome<T> {
    /// Number of result rows carried by this outcome.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::NotFound | Self::NoRecords => 0,
        }
    }
}

/// Repository interface for the fixed report menu.
pub trait ReportRepository {
    /// Titles of accepted, reviewed papers in `area`, best average first.
    fn accepted_papers_by_area(&self, area: &str) -> RepoResult<ReportOutcome<String>>;
    /// Titles of papers assigned to the reviewer `email`, by paper id.
    fn papers_assigned_to(&self, email: &str) -> RepoResult<ReportOutcome<String>>;
    /// Papers with a review deviating from the paper mean by more than
    /// `fraction` of that mean.
    fn inconsistent_papers(&self, fraction: f64) -> RepoResult<Vec<PaperSummary>>;
    /// Rebuilds the score-difference table and returns reviewers of papers
    /// whose diff lies in `[low, high]`.
    fn reviewers_by_diff_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> RepoResult<Vec<ReviewerContact>>;
    /// Current contents of the score-difference table, rebuilding it first.
    fn diff_scores(&mut self) -> RepoResult<Vec<DiffScore>>;
}

/// SQLite-backed report repository.
pub struct SqliteReportRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteReportRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    fn rebuild_diff_scores(&mut self) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute_batch(DIFF_SCORE_REBUILD_SQL)?;
        tx.commit()?;
        Ok(())
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn accepted_papers_by_area(&self, area: &str) -> RepoResult<ReportOutcome<String>> {
        let area_exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM papers WHERE area = ?1);",
            [area],
            |row| row.get(0),
        )?;
        if area_exists == 0 {
            return Ok(ReportOutcome::NotFound);
        }

        let mut stmt = self.conn.prepare(
            "SELECT p.title AS title
             FROM papers p
             JOIN reviews r ON r.paper = p.id
             WHERE p.decision = ?1
               AND p.area = ?2
             GROUP BY p.title
             ORDER BY AVG(r.overall) DESC, p.title ASC;",
        )?;
        let mut rows = stmt.query(params![Decision::Accepted.as_db_code(), area])?;
        let mut titles = Vec::new();
        while let Some(row) = rows.next()? {
            titles.push(row.get::<_, String>("title")?);
        }

        if titles.is_empty() {
            return Ok(ReportOutcome::NoRecords);
        }
        Ok(ReportOutcome::Rows(titles))
    }

    fn papers_assigned_to(&self, email: &str) -> RepoResult<ReportOutcome<String>> {
        // Outer joins keep the user row when nothing is assigned; that row
        // comes back with a NULL title.
        let mut stmt = self.conn.prepare(
            "SELECT papers.title AS title
             FROM users
             LEFT OUTER JOIN reviews ON users.email = reviews.reviewer
             LEFT OUTER JOIN papers ON reviews.paper = papers.id
             WHERE users.email = ?1
             ORDER BY papers.id;",
        )?;
        let mut rows = stmt.query([email])?;
        let mut titles = Vec::new();
        let mut saw_user = false;
        while let Some(row) = rows.next()? {
            saw_user = true;
            if let Some(title) = row.get::<_, Option<String>>("title")? {
                titles.push(title);
            }
        }

        Ok(match (saw_user, titles.is_empty()) {
            (false, _) => ReportOutcome::NotFound,
            (true, true) => ReportOutcome::NoRecords,
            (true, false) => ReportOutcome::Rows(titles),
        })
    }

    fn inconsistent_papers(&self, fraction: f64) -> RepoResult<Vec<PaperSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id AS id, p.title AS title
             FROM papers p
             JOIN reviews r ON r.paper = p.id
             WHERE ?1 < ABS(1 - r.overall / (
                SELECT AVG(r2.overall)
                FROM reviews r2
                WHERE r2.paper = p.id
             ))
             GROUP BY p.id, p.title
             ORDER BY p.id;",
        )?;
        let mut rows = stmt.query([fraction])?;
        let mut papers = Vec::new();
        while let Some(row) = rows.next()? {
            papers.push(parse_paper_summary(row)?);
        }
        Ok(papers)
    }

    fn reviewers_by_diff_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> RepoResult<Vec<ReviewerContact>> {
        self.rebuild_diff_scores()?;

        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT u.email AS email, u.name AS name
             FROM temp.diff_score d
             JOIN reviews r ON r.paper = d.pid
             JOIN users u ON u.email = r.reviewer
             WHERE d.diff >= ?1 AND d.diff <= ?2
             ORDER BY u.email;",
        )?;
        let mut rows = stmt.query([low, high])?;
        let mut reviewers = Vec::new();
        while let Some(row) = rows.next()? {
            reviewers.push(ReviewerContact {
                email: row.get("email")?,
                name: row.get("name")?,
            });
        }
        Ok(reviewers)
    }

    fn diff_scores(&mut self) -> RepoResult<Vec<DiffScore>> {
        self.rebuild_diff_scores()?;

        let mut stmt = self
            .conn
            .prepare("SELECT pid, ptitle, diff FROM temp.diff_score ORDER BY pid;")?;
        let mut rows = stmt.query([])?;
        let mut scores = Vec::new();
        while let Some(row) = rows.next()? {
            scores.push(DiffScore {
                paper_id: row.get("pid")?,
                title: row.get("ptitle")?,
                diff: row.get("diff")?,
            });
        }
        Ok(scores)
    }
}

fn parse_paper_summary(row: &Row<'_>) -> RepoResult<PaperSummary> {
    Ok(PaperSummary {
        id: row.get("id")?,
        title: row.get("title")?,
    })
}
