use rusqlite::{params, Connection, OptionalExtension};

use super::models::{NewPlayer, Player, PlayerId};
use crate::errors::{AnalyticsError, Result};

const PLAYER_COLUMNS: &str = "player_id, first_name, last_name, country, birthdate";

pub fn insert_player(conn: &Connection, player: &NewPlayer) -> Result<Player> {
    validate_names(player.first_name, player.last_name)?;

    let sql = format!(
        "INSERT INTO players (first_name, last_name, country, birthdate) VALUES (?1, ?2, ?3, ?4) RETURNING {PLAYER_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            player.first_name,
            player.last_name,
            player.country,
            player.birthdate
        ],
        parse_player_row,
    )?;
    Ok(inserted)
}

/// Names must survive the "First Last" split used for lookups: a single
/// first-name token and a surname of single-space separated words.
fn validate_names(first_name: &str, last_name: &str) -> Result<()> {
    if first_name.is_empty() || first_name.contains(char::is_whitespace) {
        return Err(AnalyticsError::invalid(format!(
            "first name '{first_name}' must be one word"
        )));
    }

    let normalized = last_name.split_whitespace().collect::<Vec<_>>().join(" ");
    if last_name.is_empty() || normalized != last_name {
        return Err(AnalyticsError::invalid(format!(
            "last name '{last_name}' must be words separated by single spaces"
        )));
    }
    Ok(())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        country: row.get(3)?,
        birthdate: row.get(4)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = ?1");

    let player = conn
        .query_row(&sql, params![id], parse_player_row)
        .optional()?;
    Ok(player)
}

/// Every player whose stored names match exactly. More than one row
/// means the full name is ambiguous.
pub fn find_by_name(conn: &Connection, first_name: &str, last_name: &str) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE first_name = ?1 AND last_name = ?2 ORDER BY player_id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![first_name, last_name], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY player_id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::resolver;
    use crate::database::testing;

    #[test]
    fn test_insert_assigns_id() {
        let conn = testing::empty_db();
        let player = insert_player(&conn, &testing::new_player("Jannik", "Sinner")).unwrap();

        assert!(player.id > 0);
        assert_eq!(find_by_id(&conn, player.id).unwrap(), Some(player));
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let conn = testing::seeded_db();

        assert_eq!(find_by_name(&conn, "Rafael", "Nadal").unwrap().len(), 1);
        assert!(find_by_name(&conn, "rafael", "nadal").unwrap().is_empty());
    }

    #[test]
    fn test_inserted_multi_word_surname_resolves() {
        let conn = testing::seeded_db();
        let player =
            insert_player(&conn, &testing::new_player("Felix", "Auger Aliassime")).unwrap();

        let resolved = resolver::resolve_player_id(&conn, &player.full_name()).unwrap();
        assert_eq!(resolved, player.id);
    }

    #[test]
    fn test_rejects_names_that_cannot_be_resolved() {
        let conn = testing::seeded_db();
        let unresolvable = [
            ("Juan Martin", "del Potro"),
            ("Felix", "Auger  Aliassime"),
            ("Jannik", ""),
            ("", "Sinner"),
            ("Casper", " Ruud"),
            ("Holger", "Rune\tDane"),
        ];

        for (first_name, last_name) in unresolvable {
            let result = insert_player(&conn, &testing::new_player(first_name, last_name));
            assert!(
                matches!(result, Err(AnalyticsError::InvalidArgument(_))),
                "accepted {first_name:?} {last_name:?}"
            );
        }
        assert_eq!(list_all(&conn).unwrap().len(), 6);
    }

    #[test]
    fn test_find_by_id_missing() {
        let conn = testing::seeded_db();
        assert_eq!(find_by_id(&conn, 999).unwrap(), None);
    }
}
