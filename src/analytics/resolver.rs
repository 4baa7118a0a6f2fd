use std::str::FromStr;

use log::debug;
use rusqlite::Connection;

use crate::database::{players, Player, PlayerId};
use crate::errors::{AnalyticsError, Result};

/// A caller-supplied player handle: either a stored id or a "First Last"
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    Id(PlayerId),
    Name(String),
}

impl PlayerRef {
    /// Digits (with an optional sign) are an id, anything else a name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<PlayerId>() {
            Ok(id) => PlayerRef::Id(id),
            Err(_) => PlayerRef::Name(trimmed.to_string()),
        }
    }
}

impl FromStr for PlayerRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        PlayerRef::Name(name.to_string())
    }
}

/// First token is the first name, the rest (single-space joined) the last
/// name, so "Juan Martin del Potro" splits as ("Juan", "Martin del Potro").
pub fn split_full_name(full_name: &str) -> Result<(&str, String)> {
    let mut tokens = full_name.split_whitespace();
    let first_name = tokens.next();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    match first_name {
        Some(first) if !last_name.is_empty() => Ok((first, last_name)),
        _ => Err(AnalyticsError::invalid(format!(
            "'{full_name}' is not a full name (expected \"First Last\")"
        ))),
    }
}

/// Exact, case-sensitive lookup. Duplicate full names are rejected as
/// ambiguous instead of picking one.
pub fn resolve_name(conn: &Connection, full_name: &str) -> Result<Player> {
    let (first_name, last_name) = split_full_name(full_name)?;
    let mut candidates = players::find_by_name(conn, first_name, &last_name)?;

    match candidates.len() {
        0 => Err(AnalyticsError::not_found("player", full_name)),
        1 => Ok(candidates.remove(0)),
        count => {
            debug!("Name '{}' resolved to {} players", full_name, count);
            Err(AnalyticsError::AmbiguousInput {
                name: full_name.to_string(),
                count,
            })
        }
    }
}

pub fn resolve_player_id(conn: &Connection, full_name: &str) -> Result<PlayerId> {
    resolve_name(conn, full_name).map(|player| player.id)
}

pub fn resolve(conn: &Connection, player: &PlayerRef) -> Result<Player> {
    match player {
        PlayerRef::Id(id) => {
            players::find_by_id(conn, *id)?.ok_or_else(|| AnalyticsError::not_found("player", id))
        }
        PlayerRef::Name(name) => resolve_name(conn, name),
    }
}
