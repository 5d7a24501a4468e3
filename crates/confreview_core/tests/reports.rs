mod common;

use common::{add_paper, add_review, add_user, empty_db, seeded_db};
use confreview_core::{
    PaperSummary, ReportOutcome, ReportRepository, ReviewerContact, SqliteReportRepository,
};

fn emails(reviewers: &[ReviewerContact]) -> Vec<&str> {
    reviewers.iter().map(|r| r.email.as_str()).collect()
}

#[test]
fn accepted_papers_are_ordered_by_average_score() {
    let mut conn = seeded_db();
    let repo = SqliteReportRepository::new(&mut conn);

    let outcome = repo.accepted_papers_by_area("DB").unwrap();
    assert_eq!(
        outcome,
        ReportOutcome::Rows(vec!["Indexing Tries".to_string(), "Lazy Joins".to_string()])
    );
}

#[test]
fn higher_average_wins_over_alphabetical_title() {
    let mut conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_paper(&conn, 1, "Aardvark", "DB", "A");
    add_paper(&conn, 2, "Zebra", "DB", "A");
    add_review(&conn, 1, "ann@Email", 2);
    add_review(&conn, 2, "ann@Email", 4);
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.accepted_papers_by_area("DB").unwrap(),
        ReportOutcome::Rows(vec!["Zebra".to_string(), "Aardvark".to_string()])
    );
}

#[test]
fn equal_averages_fall_back_to_title_order() {
    let mut conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_paper(&conn, 1, "Mango", "DB", "A");
    add_paper(&conn, 2, "Apple", "DB", "A");
    add_review(&conn, 1, "ann@Email", 3);
    add_review(&conn, 2, "ann@Email", 3);
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.accepted_papers_by_area("DB").unwrap(),
        ReportOutcome::Rows(vec!["Apple".to_string(), "Mango".to_string()])
    );
}

#[test]
fn accepted_papers_distinguish_unknown_area_from_area_without_acceptances() {
    let mut conn = seeded_db();
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.accepted_papers_by_area("AI").unwrap(),
        ReportOutcome::NoRecords
    );
    assert_eq!(
        repo.accepted_papers_by_area("XX").unwrap(),
        ReportOutcome::NotFound
    );
}

#[test]
fn accepted_papers_match_area_codes_exactly() {
    let mut conn = seeded_db();
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.accepted_papers_by_area("db").unwrap(),
        ReportOutcome::NotFound
    );
}

#[test]
fn assigned_papers_are_ordered_by_paper_id() {
    let mut conn = seeded_db();
    add_review(&conn, 2, "ann@Email", 3);
    let repo = SqliteReportRepository::new(&mut conn);

    let outcome = repo.papers_assigned_to("ann@Email").unwrap();
    assert_eq!(
        outcome,
        ReportOutcome::Rows(vec![
            "Indexing Tries".to_string(),
            "Lazy Joins".to_string(),
            "Neural Nets".to_string(),
        ])
    );
}

#[test]
fn assigned_papers_follow_id_not_title() {
    let mut conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_paper(&conn, 1, "Zebra Study", "DB", "P");
    add_paper(&conn, 2, "Alpha Study", "DB", "P");
    add_review(&conn, 2, "ann@Email", 3);
    add_review(&conn, 1, "ann@Email", 3);
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.papers_assigned_to("ann@Email").unwrap(),
        ReportOutcome::Rows(vec!["Zebra Study".to_string(), "Alpha Study".to_string()])
    );
}

#[test]
fn assigned_papers_distinguish_idle_reviewer_from_unknown_reviewer() {
    let mut conn = seeded_db();
    let repo = SqliteReportRepository::new(&mut conn);

    assert_eq!(
        repo.papers_assigned_to("idle@Email").unwrap(),
        ReportOutcome::NoRecords
    );
    assert_eq!(
        repo.papers_assigned_to("ghost@Email").unwrap(),
        ReportOutcome::NotFound
    );
}

#[test]
fn inconsistent_paper_is_listed_once_even_when_every_review_deviates() {
    let mut conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_user(&conn, "bob@Email", "Bob");
    add_paper(&conn, 10, "Split Opinions", "DB", "P");
    add_review(&conn, 10, "ann@Email", 10);
    add_review(&conn, 10, "bob@Email", 1);
    let repo = SqliteReportRepository::new(&mut conn);

    let papers = repo.inconsistent_papers(0.5).unwrap();
    assert_eq!(
        papers,
        vec![PaperSummary {
            id: 10,
            title: "Split Opinions".to_string(),
        }]
    );
}

#[test]
fn inconsistency_threshold_is_strict() {
    let mut conn = seeded_db();
    let repo = SqliteReportRepository::new(&mut conn);

    // Paper 3 has reviews 3 and 5, both deviating by exactly 25%.
    let above = repo.inconsistent_papers(0.2).unwrap();
    assert_eq!(above.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);

    let at = repo.inconsistent_papers(0.25).unwrap();
    assert!(at.is_empty());
}

#[test]
fn papers_with_zero_mean_are_never_inconsistent() {
    let mut conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_paper(&conn, 1, "Zeroes", "DB", "R");
    add_review(&conn, 1, "ann@Email", 0);
    let repo = SqliteReportRepository::new(&mut conn);

    assert!(repo.inconsistent_papers(0.0).unwrap().is_empty());
}

#[test]
fn diff_scores_compare_paper_average_to_area_average() {
    let mut conn = seeded_db();
    let mut repo = SqliteReportRepository::new(&mut conn);

    let scores = repo.diff_scores().unwrap();
    let pairs: Vec<(i64, f64)> = scores.iter().map(|s| (s.paper_id, s.diff)).collect();
    assert_eq!(pairs, vec![(1, 0.25), (2, 1.75), (3, 0.0), (5, 1.25)]);
}

#[test]
fn zero_range_returns_reviewers_of_papers_matching_area_average() {
    let mut conn = seeded_db();
    let mut repo = SqliteReportRepository::new(&mut conn);

    let reviewers = repo.reviewers_by_diff_range(0.0, 0.0).unwrap();
    assert_eq!(emails(&reviewers), vec!["ann@Email", "dora@Email"]);
    assert_eq!(reviewers[1].name, "Dora");
}

#[test]
fn diff_range_bounds_are_inclusive() {
    let mut conn = seeded_db();
    let mut repo = SqliteReportRepository::new(&mut conn);

    let reviewers = repo.reviewers_by_diff_range(1.25, 1.75).unwrap();
    assert_eq!(emails(&reviewers), vec!["carl@Email", "erin@Email"]);
}

#[test]
fn reviewer_of_several_matching_papers_is_listed_once() {
    let mut conn = seeded_db();
    add_review(&conn, 2, "erin@Email", 2);
    let mut repo = SqliteReportRepository::new(&mut conn);

    let reviewers = repo.reviewers_by_diff_range(1.0, 2.0).unwrap();
    assert_eq!(emails(&reviewers), vec!["carl@Email", "erin@Email"]);
}

#[test]
fn inverted_diff_range_matches_nothing() {
    let mut conn = seeded_db();
    let mut repo = SqliteReportRepository::new(&mut conn);

    assert!(repo.reviewers_by_diff_range(2.0, 1.0).unwrap().is_empty());
}

#[test]
fn diff_table_is_rebuilt_on_every_run() {
    let mut conn = seeded_db();
    {
        let mut repo = SqliteReportRepository::new(&mut conn);
        let first = repo.reviewers_by_diff_range(0.2, 0.3).unwrap();
        assert_eq!(emails(&first), vec!["ann@Email", "bob@Email"]);
    }

    // Paper 1 moves to a diff of 0.75.
    conn.execute("UPDATE reviews SET overall = 5 WHERE paper = 1;", [])
        .unwrap();

    let mut repo = SqliteReportRepository::new(&mut conn);
    let second = repo.reviewers_by_diff_range(0.2, 0.3).unwrap();
    assert!(second.is_empty());
}

#[test]
fn diff_table_never_touches_persistent_schema() {
    let mut conn = seeded_db();
    {
        let mut repo = SqliteReportRepository::new(&mut conn);
        repo.reviewers_by_diff_range(0.0, 10.0).unwrap();
        repo.reviewers_by_diff_range(0.0, 10.0).unwrap();
    }

    let persistent: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE name = 'diff_score';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let temporary: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_temp_master WHERE name = 'diff_score';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(persistent, 0);
    assert_eq!(temporary, 1);
}
