#![allow(dead_code)]

use rusqlite::{params, Connection};

pub const SCHEMA_SQL: &str = "
CREATE TABLE users (
    email TEXT PRIMARY KEY,
    name TEXT,
    phone TEXT
);
CREATE TABLE papers (
    id INTEGER PRIMARY KEY,
    title TEXT,
    abstract TEXT,
    email TEXT,
    decision CHAR(1),
    area TEXT
);
CREATE TABLE reviews (
    paper INTEGER,
    reviewer TEXT,
    originality INTEGER,
    importance INTEGER,
    soundness INTEGER,
    overall INTEGER,
    PRIMARY KEY (paper, reviewer)
);
";

pub fn empty_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA_SQL).unwrap();
    conn
}

pub fn add_user(conn: &Connection, email: &str, name: &str) {
    conn.execute(
        "INSERT INTO users (email, name) VALUES (?1, ?2);",
        params![email, name],
    )
    .unwrap();
}

pub fn add_paper(conn: &Connection, id: i64, title: &str, area: &str, decision: &str) {
    conn.execute(
        "INSERT INTO papers (id, title, area, decision) VALUES (?1, ?2, ?3, ?4);",
        params![id, title, area, decision],
    )
    .unwrap();
}

pub fn add_review(conn: &Connection, paper: i64, reviewer: &str, overall: i64) {
    conn.execute(
        "INSERT INTO reviews (paper, reviewer, overall) VALUES (?1, ?2, ?3);",
        params![paper, reviewer, overall],
    )
    .unwrap();
}

/// Two areas and four reviewers.
///
/// - DB: paper 1 (accepted, reviews 4 and 4), paper 2 (accepted, review 2),
///   paper 4 (accepted, no reviews), paper 5 (rejected, review 5 by erin).
/// - AI: paper 3 (rejected, reviews 3 and 5).
/// - `idle@Email` exists but reviews nothing.
pub fn seeded_db() -> Connection {
    let conn = empty_db();
    add_user(&conn, "ann@Email", "Ann");
    add_user(&conn, "bob@Email", "Bob");
    add_user(&conn, "carl@Email", "Carl");
    add_user(&conn, "dora@Email", "Dora");
    add_user(&conn, "erin@Email", "Erin");
    add_user(&conn, "idle@Email", "Idle");

    add_paper(&conn, 1, "Indexing Tries", "DB", "A");
    add_paper(&conn, 2, "Lazy Joins", "DB", "A");
    add_paper(&conn, 3, "Neural Nets", "AI", "R");
    add_paper(&conn, 4, "Unreviewed Work", "DB", "A");
    add_paper(&conn, 5, "Rejected Storage", "DB", "R");

    add_review(&conn, 1, "ann@Email", 4);
    add_review(&conn, 1, "bob@Email", 4);
    add_review(&conn, 2, "carl@Email", 2);
    add_review(&conn, 3, "dora@Email", 3);
    add_review(&conn, 3, "ann@Email", 5);
    add_review(&conn, 5, "erin@Email", 5);
    conn
}
