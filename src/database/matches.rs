use rusqlite::{params, Connection, OptionalExtension};

use super::models::{
    DrawRow, HeadToHeadRow, Match, MatchId, NewMatch, PlayerId, SurfaceTally, TournamentId,
};
use super::{players, tournaments};
use crate::errors::{AnalyticsError, Result};

const MATCH_COLUMNS: &str =
    "match_id, tournament_id, player1_id, player2_id, round, match_date, winner_id, score";

/// Inserts a match after checking the invariants the schema cannot see:
/// both players exist, the winner is one of them, and the match date lies
/// inside the tournament window.
pub fn insert_match(conn: &Connection, new_match: &NewMatch) -> Result<Match> {
    validate_match(conn, new_match)?;

    let sql = format!(
        "INSERT INTO matches (tournament_id, player1_id, player2_id, round, match_date, winner_id, score) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {MATCH_COLUMNS}"
    );

    let inserted = conn.query_row(
        &sql,
        params![
            new_match.tournament_id,
            new_match.player1_id,
            new_match.player2_id,
            new_match.round,
            new_match.match_date,
            new_match.winner_id,
            new_match.score
        ],
        parse_match_row,
    )?;
    Ok(inserted)
}

fn validate_match(conn: &Connection, new_match: &NewMatch) -> Result<()> {
    if new_match.player1_id == new_match.player2_id {
        return Err(AnalyticsError::invalid("a match needs two distinct players"));
    }
    if new_match.winner_id != new_match.player1_id && new_match.winner_id != new_match.player2_id
    {
        return Err(AnalyticsError::invalid(format!(
            "winner {} did not play in this match",
            new_match.winner_id
        )));
    }

    let tournament = tournaments::find_by_id(conn, new_match.tournament_id)?
        .ok_or_else(|| AnalyticsError::not_found("tournament", new_match.tournament_id))?;
    if new_match.match_date < tournament.start_date || new_match.match_date > tournament.end_date {
        return Err(AnalyticsError::invalid(format!(
            "match date {} is outside {} ({} to {})",
            new_match.match_date, tournament.name, tournament.start_date, tournament.end_date
        )));
    }

    for player_id in [new_match.player1_id, new_match.player2_id] {
        if players::find_by_id(conn, player_id)?.is_none() {
            return Err(AnalyticsError::not_found("player", player_id));
        }
    }
    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player1_id: row.get(2)?,
        player2_id: row.get(3)?,
        round: row.get(4)?,
        match_date: row.get(5)?,
        winner_id: row.get(6)?,
        score: row.get(7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: MatchId) -> Result<Option<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = ?1");

    let found = conn
        .query_row(&sql, params![id], parse_match_row)
        .optional()?;
    Ok(found)
}

pub fn count_played(conn: &Connection, player_id: PlayerId) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM matches WHERE player1_id = ?1 OR player2_id = ?1";
    Ok(conn.query_row(sql, params![player_id], |row| row.get(0))?)
}

pub fn count_won(conn: &Connection, player_id: PlayerId) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM matches WHERE winner_id = ?1";
    Ok(conn.query_row(sql, params![player_id], |row| row.get(0))?)
}

/// Matches between two players regardless of which side each was stored
/// on, most recent first.
pub fn list_between(
    conn: &Connection,
    first_id: PlayerId,
    second_id: PlayerId,
) -> Result<Vec<HeadToHeadRow>> {
    let sql = "
        SELECT m.match_id, t.name, m.round, m.match_date, m.score, m.winner_id
        FROM matches m
        JOIN tournaments t ON m.tournament_id = t.tournament_id
        WHERE (m.player1_id = ?1 AND m.player2_id = ?2)
           OR (m.player1_id = ?2 AND m.player2_id = ?1)
        ORDER BY m.match_date DESC, m.match_id DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![first_id, second_id], |row| {
            Ok(HeadToHeadRow {
                match_id: row.get(0)?,
                tournament_name: row.get(1)?,
                round: row.get(2)?,
                match_date: row.get(3)?,
                score: row.get(4)?,
                winner_id: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Tournament matches with both player names, in match id order. Round
/// ordering is applied by the caller.
pub fn list_draw_rows(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<DrawRow>> {
    let sql = "
        SELECT m.match_id, m.round, m.player1_id,
               p1.first_name || ' ' || p1.last_name,
               p2.first_name || ' ' || p2.last_name,
               m.score, m.winner_id
        FROM matches m
        JOIN players p1 ON m.player1_id = p1.player_id
        JOIN players p2 ON m.player2_id = p2.player_id
        WHERE m.tournament_id = ?1
        ORDER BY m.match_id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(DrawRow {
                match_id: row.get(0)?,
                round: row.get(1)?,
                player1_id: row.get(2)?,
                player1_name: row.get(3)?,
                player2_name: row.get(4)?,
                score: row.get(5)?,
                winner_id: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Per-surface counts for one player. A loss is a match the opponent won,
/// so a winner outside the pairing counts in neither column.
pub fn surface_tallies(conn: &Connection, player_id: PlayerId) -> Result<Vec<SurfaceTally>> {
    let sql = "
        SELECT t.surface,
               COUNT(*),
               SUM(CASE WHEN m.winner_id = ?1 THEN 1 ELSE 0 END),
               SUM(CASE WHEN m.winner_id <> ?1
                         AND m.winner_id IN (m.player1_id, m.player2_id) THEN 1 ELSE 0 END)
        FROM matches m
        JOIN tournaments t ON m.tournament_id = t.tournament_id
        WHERE m.player1_id = ?1 OR m.player2_id = ?1
        GROUP BY t.surface
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], |row| {
            Ok(SurfaceTally {
                surface: row.get(0)?,
                total_matches: row.get(1)?,
                wins: row.get(2)?,
                losses: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Round;
    use crate::database::testing::{self, date};

    fn final_at(date_str: &'static str, winner_id: PlayerId) -> NewMatch<'static> {
        NewMatch {
            tournament_id: 1,
            player1_id: 1,
            player2_id: 2,
            round: Round::F,
            match_date: date(date_str),
            winner_id,
            score: "6-4,6-4,6-4",
        }
    }

    #[test]
    fn test_insert_match_round_trips() {
        let conn = testing::seeded_db();
        let inserted = insert_match(&conn, &final_at("2025-07-13", 1)).unwrap();

        assert_eq!(inserted.round, Round::F);
        assert_eq!(find_by_id(&conn, inserted.id).unwrap(), Some(inserted));
    }

    #[test]
    fn test_insert_match_rejects_outside_winner() {
        let conn = testing::seeded_db();
        let result = insert_match(&conn, &final_at("2025-07-13", 3));
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
    }

    #[test]
    fn test_insert_match_rejects_same_player_twice() {
        let conn = testing::seeded_db();
        let mut new_match = final_at("2025-07-13", 1);
        new_match.player2_id = 1;

        let result = insert_match(&conn, &new_match);
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
    }

    #[test]
    fn test_insert_match_rejects_date_outside_tournament() {
        let conn = testing::seeded_db();
        let result = insert_match(&conn, &final_at("2025-07-15", 1));
        assert!(matches!(result, Err(AnalyticsError::InvalidArgument(_))));
    }

    #[test]
    fn test_insert_match_requires_known_tournament() {
        let conn = testing::seeded_db();
        let mut new_match = final_at("2025-07-13", 1);
        new_match.tournament_id = 42;

        let result = insert_match(&conn, &new_match);
        assert!(matches!(result, Err(AnalyticsError::NotFound { entity: "tournament", .. })));
    }

    #[test]
    fn test_counts_for_seeded_finalist() {
        let conn = testing::seeded_db();

        // Djokovic: won the Wimbledon final and the US Open quarterfinal
        assert_eq!(count_played(&conn, 2).unwrap(), 2);
        assert_eq!(count_won(&conn, 2).unwrap(), 2);
        assert_eq!(count_played(&conn, 1).unwrap(), 1);
        assert_eq!(count_won(&conn, 1).unwrap(), 0);
    }

    #[test]
    fn test_list_between_ignores_stored_side() {
        let conn = testing::seeded_db();

        let forward = list_between(&conn, 1, 2).unwrap();
        let reverse = list_between(&conn, 2, 1).unwrap();

        assert_eq!(forward.len(), 1);
        assert_eq!(reverse.len(), 1);
        assert_eq!(forward[0].match_id, reverse[0].match_id);
    }
}
