use rusqlite::{params, Connection, OptionalExtension};

use super::models::{NewTournament, Tournament, TournamentId};
use crate::errors::{AnalyticsError, Result};

const TOURNAMENT_COLUMNS: &str =
    "tournament_id, name, location, surface, start_date, end_date, category";

pub fn insert_tournament(conn: &Connection, tournament: &NewTournament) -> Result<Tournament> {
    if tournament.start_date > tournament.end_date {
        return Err(AnalyticsError::invalid(format!(
            "tournament '{}' ends before it starts",
            tournament.name
        )));
    }

    let sql = format!(
        "INSERT INTO tournaments (name, location, surface, start_date, end_date, category) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {TOURNAMENT_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            tournament.name,
            tournament.location,
            tournament.surface,
            tournament.start_date,
            tournament.end_date,
            tournament.category
        ],
        parse_tournament_row,
    )?;
    Ok(inserted)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        surface: row.get(3)?,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        category: row.get(6)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE tournament_id = ?1");

    let tournament = conn
        .query_row(&sql, params![id], parse_tournament_row)
        .optional()?;
    Ok(tournament)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Category, Surface};
    use crate::database::setup;
    use crate::database::testing::{self, date};

    #[test]
    fn test_enums_round_trip_through_text_columns() {
        let conn = testing::seeded_db();
        let madrid = find_by_id(&conn, 3).unwrap().unwrap();

        assert_eq!(madrid.name, "Madrid Open");
        assert_eq!(madrid.surface, Surface::Clay);
        assert_eq!(madrid.category, Category::Masters1000);
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let conn = testing::empty_db();
        let result = insert_tournament(
            &conn,
            &NewTournament {
                name: "Backwards Cup",
                location: "Nowhere",
                surface: Surface::Hard,
                start_date: date("2025-03-10"),
                end_date: date("2025-03-01"),
                category: Category::Atp250,
            },
        );

        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
        assert_eq!(setup::count_rows(&conn, "tournaments").unwrap(), 0);
    }
}
