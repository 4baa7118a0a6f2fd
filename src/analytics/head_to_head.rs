use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;
use serde::Serialize;

use super::resolver::{self, PlayerRef};
use crate::database::{matches, Player, Round};
use crate::errors::{AnalyticsError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadMatch {
    pub tournament_name: String,
    pub round: Round,
    pub date: NaiveDate,
    pub score: String,
    pub winner_name: String,
}

/// Every meeting between two players, most recent first. Argument order
/// does not affect the result.
pub fn head_to_head(
    conn: &Connection,
    first: &PlayerRef,
    second: &PlayerRef,
) -> Result<Vec<HeadToHeadMatch>> {
    // Both sides resolve before the matches table is touched
    let first = resolver::resolve(conn, first)?;
    let second = resolver::resolve(conn, second)?;
    if first.id == second.id {
        return Err(AnalyticsError::invalid(format!(
            "head-to-head needs two different players, got {} twice",
            first.full_name()
        )));
    }

    let rows = matches::list_between(conn, first.id, second.id)?;

    Ok(rows
        .into_iter()
        .map(|row| HeadToHeadMatch {
            winner_name: winner_name(row.winner_id, &first, &second, row.match_id),
            tournament_name: row.tournament_name,
            round: row.round,
            date: row.match_date,
            score: row.score,
        })
        .collect())
}

// Compared against the callers' players, not the stored player1/player2
// columns, so either storage order yields the same label.
fn winner_name(winner_id: i64, first: &Player, second: &Player, match_id: i64) -> String {
    if winner_id == first.id {
        first.full_name()
    } else if winner_id == second.id {
        second.full_name()
    } else {
        warn!("Match {} records winner {} who did not play", match_id, winner_id);
        format!("player #{winner_id}")
    }
}
