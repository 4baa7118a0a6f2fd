use rusqlite::Connection;
use serde::Serialize;

use super::record::percentage;
use crate::database::{match_stats, matches, MatchId};
use crate::errors::{AnalyticsError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchStats {
    pub player_name: String,
    pub aces: i32,
    pub double_faults: i32,
    pub first_serves_in: i32,
    pub first_serves_total: i32,
    pub first_serve_percentage: f64,
    pub break_points_converted: i32,
    pub break_points_total: i32,
    pub break_point_percentage: f64,
}

pub fn match_stats(conn: &Connection, match_id: MatchId) -> Result<Vec<PlayerMatchStats>> {
    if matches::find_by_id(conn, match_id)?.is_none() {
        return Err(AnalyticsError::not_found("match", match_id));
    }

    let rows = match_stats::list_by_match(conn, match_id)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let stat = row.stat;
            PlayerMatchStats {
                player_name: row.player_name,
                aces: stat.aces,
                double_faults: stat.double_faults,
                first_serves_in: stat.first_serves_in,
                first_serves_total: stat.first_serves_total,
                first_serve_percentage: percentage(
                    stat.first_serves_in.into(),
                    stat.first_serves_total.into(),
                ),
                break_points_converted: stat.break_points_converted,
                break_points_total: stat.break_points_total,
                break_point_percentage: percentage(
                    stat.break_points_converted.into(),
                    stat.break_points_total.into(),
                ),
            }
        })
        .collect())
}
