use log::warn;
use rusqlite::Connection;
use serde::Serialize;

use super::record::percentage;
use super::resolver::{self, PlayerRef};
use crate::database::{matches, Surface};
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceRecord {
    pub surface: Surface,
    pub total_matches: i64,
    pub wins: i64,
    pub losses: i64,
    pub win_percentage: f64,
}

/// Win/loss per court surface, best surface (most wins) first. A player
/// who exists but has no matches gets an empty breakdown.
pub fn surface_breakdown(conn: &Connection, player: &PlayerRef) -> Result<Vec<SurfaceRecord>> {
    let player = resolver::resolve(conn, player)?;
    let tallies = matches::surface_tallies(conn, player.id)?;

    let mut records: Vec<SurfaceRecord> = tallies
        .into_iter()
        .map(|tally| {
            if tally.wins + tally.losses != tally.total_matches {
                warn!(
                    "{} on {}: {} matches but {} wins and {} losses",
                    player.full_name(),
                    tally.surface,
                    tally.total_matches,
                    tally.wins,
                    tally.losses
                );
            }
            SurfaceRecord {
                surface: tally.surface,
                total_matches: tally.total_matches,
                wins: tally.wins,
                losses: tally.losses,
                win_percentage: percentage(tally.wins, tally.total_matches),
            }
        })
        .collect();

    records.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.surface.as_str().cmp(b.surface.as_str())));
    Ok(records)
}
