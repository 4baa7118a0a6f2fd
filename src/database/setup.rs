use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::{params, Connection};
use serde::Serialize;

use super::{match_stats, matches, players, seed, tournaments};
use crate::errors::{self, AnalyticsError};

/// Tables in dependency order: each one only references tables before it.
pub const TABLES: [&str; 4] = ["players", "tournaments", "matches", "match_stats"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
}

/// Creates missing tables and seeds each empty one. Safe to run on every
/// start: populated tables are left untouched.
pub fn bootstrap(conn: &mut Connection) -> Result<SeedReport> {
    init_schema(conn)?;
    seed_empty_tables(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    debug!("Database schema ensured");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

pub fn seed_empty_tables(conn: &mut Connection) -> Result<SeedReport> {
    let tx = conn.transaction()?;
    let mut report = SeedReport::default();

    for table in TABLES {
        if count_rows(&tx, table)? > 0 {
            report.skipped.push(table);
            continue;
        }
        seed_table(&tx, table).with_context(|| format!("Failed to seed table {table}"))?;
        report.seeded.push(table);
    }

    tx.commit()?;
    info!(
        "Seeded tables: {:?}, already populated: {:?}",
        report.seeded, report.skipped
    );
    Ok(report)
}

fn seed_table(conn: &Connection, table: &str) -> errors::Result<()> {
    match table {
        "players" => {
            for player in seed::players() {
                players::insert_player(conn, &player)?;
            }
        }
        "tournaments" => {
            for tournament in seed::tournaments() {
                tournaments::insert_tournament(conn, &tournament)?;
            }
        }
        "matches" => {
            for new_match in seed::matches() {
                matches::insert_match(conn, &new_match)?;
            }
        }
        "match_stats" => {
            for stat in seed::match_stats() {
                match_stats::insert_match_stat(conn, &stat)?;
            }
        }
        other => return Err(AnalyticsError::not_found("table", other)),
    }
    Ok(())
}

/// Row count of one of the known [`TABLES`]. Table names cannot be bound
/// as parameters, so anything else is refused.
pub fn count_rows(conn: &Connection, table: &str) -> errors::Result<i64> {
    let known = TABLES
        .iter()
        .find(|&&t| t == table)
        .ok_or_else(|| AnalyticsError::not_found("table", table))?;

    let sql = format!("SELECT COUNT(*) FROM {known}");
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

pub fn list_tables(conn: &Connection) -> errors::Result<Vec<String>> {
    let sql = "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;

    Ok(rows)
}

pub fn describe_table(conn: &Connection, table: &str) -> errors::Result<Vec<ColumnInfo>> {
    let sql = "SELECT name, type FROM pragma_table_info(?1) ORDER BY cid";

    let mut stmt = conn.prepare(sql)?;
    let columns = stmt
        .query_map(params![table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                declared_type: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    if columns.is_empty() {
        return Err(AnalyticsError::not_found("table", table));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing;

    fn counts(conn: &Connection) -> Vec<i64> {
        TABLES
            .iter()
            .map(|table| count_rows(conn, table).unwrap())
            .collect()
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let mut conn = testing::empty_connection();

        let first = bootstrap(&mut conn).unwrap();
        let after_first = counts(&conn);
        let second = bootstrap(&mut conn).unwrap();

        assert_eq!(first.seeded, TABLES.to_vec());
        assert!(second.seeded.is_empty());
        assert_eq!(second.skipped, TABLES.to_vec());
        assert_eq!(after_first, vec![6, 3, 3, 4]);
        assert_eq!(counts(&conn), after_first);
    }

    #[test]
    fn test_seeding_skips_only_populated_tables() {
        let mut conn = testing::empty_db();
        players::insert_player(&conn, &testing::new_player("Jannik", "Sinner")).unwrap();
        players::insert_player(&conn, &testing::new_player("Alexander", "Zverev")).unwrap();
        for _ in 0..4 {
            players::insert_player(&conn, &testing::new_player("Casper", "Ruud")).unwrap();
        }

        let report = seed_empty_tables(&mut conn).unwrap();

        assert_eq!(report.skipped, vec!["players"]);
        assert_eq!(counts(&conn), vec![6, 3, 3, 4]);
    }

    #[test]
    fn test_list_tables_hides_internal_tables() {
        let conn = testing::seeded_db();
        let tables = list_tables(&conn).unwrap();
        assert_eq!(tables, vec!["match_stats", "matches", "players", "tournaments"]);
    }

    #[test]
    fn test_describe_table_binds_name() {
        let conn = testing::seeded_db();

        let columns = describe_table(&conn, "players").unwrap();
        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["player_id", "first_name", "last_name", "country", "birthdate"]
        );
        assert_eq!(columns[4].declared_type, "DATE");

        let hostile = describe_table(&conn, "players); DROP TABLE players; --");
        assert!(matches!(hostile, Err(AnalyticsError::NotFound { .. })));
        assert_eq!(count_rows(&conn, "players").unwrap(), 6);
    }

    #[test]
    fn test_count_rows_refuses_unknown_table() {
        let conn = testing::seeded_db();
        assert!(matches!(
            count_rows(&conn, "sqlite_master"),
            Err(AnalyticsError::NotFound { .. })
        ));
    }
}
