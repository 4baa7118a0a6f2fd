//! In-memory fixtures shared by unit tests.

use chrono::NaiveDate;
use rusqlite::Connection;

use super::models::NewPlayer;
use super::setup;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn empty_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn
}

/// Schema only, no rows.
pub fn empty_db() -> Connection {
    let conn = empty_connection();
    setup::init_schema(&conn).unwrap();
    conn
}

/// Schema plus the reference dataset.
pub fn seeded_db() -> Connection {
    let mut conn = empty_connection();
    setup::bootstrap(&mut conn).unwrap();
    conn
}

pub fn new_player(first_name: &'static str, last_name: &'static str) -> NewPlayer<'static> {
    NewPlayer {
        first_name,
        last_name,
        country: "Testland",
        birthdate: date("2000-01-01"),
    }
}
