use rusqlite::{params, Connection, OptionalExtension};

use super::matches;
use super::models::{MatchId, MatchStat, MatchStatRow, NewMatchStat};
use crate::errors::{AnalyticsError, Result};

pub fn insert_match_stat(conn: &Connection, stat: &NewMatchStat) -> Result<MatchStat> {
    let parent = matches::find_by_id(conn, stat.match_id)?
        .ok_or_else(|| AnalyticsError::not_found("match", stat.match_id))?;
    if !parent.involves(stat.player_id) {
        return Err(AnalyticsError::invalid(format!(
            "player {} did not play match {}",
            stat.player_id, stat.match_id
        )));
    }
    if exists_for(conn, stat.match_id, stat.player_id)? {
        return Err(AnalyticsError::invalid(format!(
            "stats for player {} in match {} already recorded",
            stat.player_id, stat.match_id
        )));
    }

    let sql = "INSERT INTO match_stats (match_id, player_id, aces, double_faults, first_serves_in, first_serves_total, break_points_converted, break_points_total) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING stat_id, match_id, player_id, aces, double_faults, first_serves_in, first_serves_total, break_points_converted, break_points_total";

    let inserted = conn.query_row(
        sql,
        params![
            stat.match_id,
            stat.player_id,
            stat.aces,
            stat.double_faults,
            stat.first_serves_in,
            stat.first_serves_total,
            stat.break_points_converted,
            stat.break_points_total
        ],
        |row| parse_stat_columns(row, 0),
    )?;
    Ok(inserted)
}

fn exists_for(conn: &Connection, match_id: MatchId, player_id: i64) -> Result<bool> {
    let sql = "SELECT 1 FROM match_stats WHERE match_id = ?1 AND player_id = ?2";
    let found = conn
        .query_row(sql, params![match_id, player_id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn parse_stat_columns(row: &rusqlite::Row, offset: usize) -> rusqlite::Result<MatchStat> {
    Ok(MatchStat {
        id: row.get(offset)?,
        match_id: row.get(offset + 1)?,
        player_id: row.get(offset + 2)?,
        aces: row.get(offset + 3)?,
        double_faults: row.get(offset + 4)?,
        first_serves_in: row.get(offset + 5)?,
        first_serves_total: row.get(offset + 6)?,
        break_points_converted: row.get(offset + 7)?,
        break_points_total: row.get(offset + 8)?,
    })
}

pub fn list_by_match(conn: &Connection, match_id: MatchId) -> Result<Vec<MatchStatRow>> {
    let sql = "
        SELECT p.first_name || ' ' || p.last_name,
               s.stat_id, s.match_id, s.player_id, s.aces, s.double_faults,
               s.first_serves_in, s.first_serves_total,
               s.break_points_converted, s.break_points_total
        FROM match_stats s
        JOIN players p ON s.player_id = p.player_id
        WHERE s.match_id = ?1
        ORDER BY s.stat_id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], |row| {
            Ok(MatchStatRow {
                player_name: row.get(0)?,
                stat: parse_stat_columns(row, 1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing;

    #[test]
    fn test_rejects_second_row_for_same_player() {
        let conn = testing::seeded_db();
        let duplicate = NewMatchStat {
            match_id: 1,
            player_id: 1,
            aces: 3,
            ..Default::default()
        };

        let result = insert_match_stat(&conn, &duplicate);
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_player_outside_match() {
        let conn = testing::seeded_db();
        let stat = NewMatchStat {
            match_id: 3,
            player_id: 1,
            ..Default::default()
        };

        let result = insert_match_stat(&conn, &stat);
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
    }

    #[test]
    fn test_insert_for_match_without_stats() {
        let conn = testing::seeded_db();
        let stat = NewMatchStat {
            match_id: 3,
            player_id: 5,
            aces: 9,
            double_faults: 4,
            ..Default::default()
        };

        let inserted = insert_match_stat(&conn, &stat).unwrap();
        assert_eq!(inserted.aces, 9);

        let rows = list_by_match(&conn, 3).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player_name, "Daniil Medvedev");
    }

    #[test]
    fn test_list_by_match_joins_names() {
        let conn = testing::seeded_db();
        let rows = list_by_match(&conn, 1).unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["Rafael Nadal", "Novak Djokovic"]);
        assert_eq!(rows[1].stat.aces, 12);
    }
}
