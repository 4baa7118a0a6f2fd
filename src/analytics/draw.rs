use log::debug;
use rusqlite::Connection;
use serde::Serialize;

use crate::database::{matches, Round, TournamentId};
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawEntry {
    pub round: Round,
    pub player1_name: String,
    pub player2_name: String,
    pub score: String,
    pub winner_name: String,
}

/// Tournament bracket from the final outwards. Within a round, matches
/// keep their id order. An unknown tournament has an empty draw.
pub fn tournament_draw(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<DrawEntry>> {
    let mut rows = matches::list_draw_rows(conn, tournament_id)?;
    if rows.is_empty() {
        debug!("Tournament {} has no recorded matches", tournament_id);
    }

    // Rows arrive in match id order and the sort is stable
    rows.sort_by_key(|row| row.round.rank());

    Ok(rows
        .into_iter()
        .map(|row| {
            let winner_name = if row.winner_id == row.player1_id {
                row.player1_name.clone()
            } else {
                row.player2_name.clone()
            };
            DrawEntry {
                round: row.round,
                player1_name: row.player1_name,
                player2_name: row.player2_name,
                score: row.score,
                winner_name,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::NewMatch;
    use crate::database::testing::{self, date};

    fn add_wimbledon_match(conn: &Connection, p1: i64, p2: i64, round: Round, winner: i64) {
        matches::insert_match(
            conn,
            &NewMatch {
                tournament_id: 1,
                player1_id: p1,
                player2_id: p2,
                round,
                match_date: date("2025-07-08"),
                winner_id: winner,
                score: "6-1,6-1,6-1",
            },
        )
        .unwrap();
    }

    #[test]
    fn test_seeded_draw_final_first() {
        let conn = testing::seeded_db();
        let draw = tournament_draw(&conn, 1).unwrap();

        assert_eq!(draw.len(), 2);
        assert_eq!(draw[0].round, Round::F);
        assert_eq!(draw[0].player1_name, "Rafael Nadal");
        assert_eq!(draw[0].winner_name, "Novak Djokovic");
        assert_eq!(draw[1].round, Round::SF);
        assert_eq!(draw[1].winner_name, "Roger Federer");
    }

    #[test]
    fn test_rounds_sorted_by_depth_not_text() {
        let conn = testing::seeded_db();
        // Inserted after the final and semifinal, with codes that sort
        // before them alphabetically
        add_wimbledon_match(&conn, 5, 6, Round::R128, 6);
        add_wimbledon_match(&conn, 1, 5, Round::QF, 1);
        add_wimbledon_match(&conn, 2, 6, Round::R16, 2);
        add_wimbledon_match(&conn, 3, 5, Round::QF, 5);

        let draw = tournament_draw(&conn, 1).unwrap();
        let rounds: Vec<_> = draw.iter().map(|e| e.round).collect();
        assert_eq!(
            rounds,
            vec![Round::F, Round::SF, Round::QF, Round::QF, Round::R16, Round::R128]
        );

        // Same round keeps insertion (match id) order
        assert_eq!(draw[2].player1_name, "Rafael Nadal");
        assert_eq!(draw[3].player1_name, "Roger Federer");
        assert_eq!(draw[3].winner_name, "Daniil Medvedev");

        let ranks: Vec<_> = draw.iter().map(|e| e.round.rank()).collect();
        assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_tournament_without_matches_is_empty() {
        let conn = testing::seeded_db();
        assert!(tournament_draw(&conn, 3).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tournament_is_empty() {
        let conn = testing::seeded_db();
        assert!(tournament_draw(&conn, 999).unwrap().is_empty());
    }
}
