use rusqlite::Connection;
use serde::Serialize;

use super::resolver::{self, PlayerRef};
use crate::database::matches;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub total_matches: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
}

/// `part / whole * 100` rounded to one decimal; 0 when `whole` is 0.
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

pub fn player_record(conn: &Connection, player: &PlayerRef) -> crate::errors::Result<PlayerRecord> {
    let player = resolver::resolve(conn, player)?;

    let total_matches = matches::count_played(conn, player.id)?;
    let matches_won = matches::count_won(conn, player.id)?;

    Ok(PlayerRecord {
        total_matches,
        matches_won,
        win_percentage: percentage(matches_won, total_matches),
    })
}
