//! Report use-case service.
//!
//! # Responsibility
//! - Provide the four report entry points used by the session loop.
//! - Emit one `report_run` logging event per report with timing and counts.
//!
//! # Invariants
//! - Service APIs never bypass repository query contracts.
//! - Log lines carry metadata only (report name, counts, durations), never
//!   titles, emails or names.

use crate::model::paper::PaperSummary;
use crate::model::user::ReviewerContact;
use crate::repo::report_repo::{RepoResult, ReportOutcome, ReportRepository};
use log::{error, info};
use std::time::Instant;

/// Use-case service wrapper for report queries.
pub struct ReportService<R: ReportRepository> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists accepted paper titles for an upper-cased area code.
    pub fn accepted_papers(&self, area: &str) -> RepoResult<ReportOutcome<String>> {
        let started_at = Instant::now();
        let result = self.repo.accepted_papers_by_area(area);
        log_outcome("accepted_papers", started_at, &result, ReportOutcome::row_count);
        result
    }

    /// Lists paper titles assigned to a reviewer.
    pub fn assigned_papers(&self, email: &str) -> RepoResult<ReportOutcome<String>> {
        let started_at = Instant::now();
        let result = self.repo.papers_assigned_to(email);
        log_outcome("assigned_papers", started_at, &result, ReportOutcome::row_count);
        result
    }

    /// Lists papers with inconsistent reviews.
    ///
    /// `fraction` is the relative deviation threshold (0.5 for 50%).
    pub fn inconsistent_papers(&self, fraction: f64) -> RepoResult<Vec<PaperSummary>> {
        let started_at = Instant::now();
        let result = self.repo.inconsistent_papers(fraction);
        log_outcome("inconsistent_papers", started_at, &result, Vec::len);
        result
    }

    /// Lists reviewers of papers whose diff score lies in `[low, high]`.
    ///
    /// An inverted range (`low > high`) matches nothing.
    pub fn reviewers_by_diff_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> RepoResult<Vec<ReviewerContact>> {
        let started_at = Instant::now();
        let result = self.repo.reviewers_by_diff_range(low, high);
        log_outcome("diff_score_reviewers", started_at, &result, Vec::len);
        result
    }
}

fn log_outcome<T>(
    report: &str,
    started_at: Instant,
    result: &RepoResult<T>,
    count: impl Fn(&T) -> usize,
) {
    match result {
        Ok(value) => info!(
            "event=report_run module=service status=ok report={} rows={} duration_ms={}",
            report,
            count(value),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=report_run module=service status=error report={} duration_ms={} error={}",
            report,
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
