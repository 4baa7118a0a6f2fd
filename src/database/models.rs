use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;

use crate::errors::AnalyticsError;

pub type PlayerId = i64;
pub type TournamentId = i64;
pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub birthdate: NaiveDate,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: String,
    pub surface: Surface,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub round: Round,
    pub match_date: NaiveDate,
    pub winner_id: PlayerId,
    pub score: String,
}

impl Match {
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStat {
    pub id: i64,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub aces: i32,
    pub double_faults: i32,
    pub first_serves_in: i32,
    pub first_serves_total: i32,
    pub break_points_converted: i32,
    pub break_points_total: i32,
}

// Insert payloads; ids are assigned by the store
#[derive(Debug, Clone)]
pub struct NewPlayer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub country: &'a str,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewTournament<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub surface: Surface,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct NewMatch<'a> {
    pub tournament_id: TournamentId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub round: Round,
    pub match_date: NaiveDate,
    pub winner_id: PlayerId,
    pub score: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct NewMatchStat {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub aces: i32,
    pub double_faults: i32,
    pub first_serves_in: i32,
    pub first_serves_total: i32,
    pub break_points_converted: i32,
    pub break_points_total: i32,
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct HeadToHeadRow {
    pub match_id: MatchId,
    pub tournament_name: String,
    pub round: Round,
    pub match_date: NaiveDate,
    pub score: String,
    pub winner_id: PlayerId,
}

#[derive(Debug, Clone)]
pub struct DrawRow {
    pub match_id: MatchId,
    pub round: Round,
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_name: String,
    pub score: String,
    pub winner_id: PlayerId,
}

#[derive(Debug, Clone)]
pub struct SurfaceTally {
    pub surface: Surface,
    pub total_matches: i64,
    pub wins: i64,
    pub losses: i64,
}

#[derive(Debug, Clone)]
pub struct MatchStatRow {
    pub player_name: String,
    pub stat: MatchStat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
        }
    }
}

impl FromStr for Surface {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hard" => Ok(Surface::Hard),
            "Clay" => Ok(Surface::Clay),
            "Grass" => Ok(Surface::Grass),
            other => Err(AnalyticsError::invalid(format!("unknown surface '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Grand Slam")]
    GrandSlam,
    #[serde(rename = "Masters 1000")]
    Masters1000,
    #[serde(rename = "ATP 500")]
    Atp500,
    #[serde(rename = "ATP 250")]
    Atp250,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GrandSlam => "Grand Slam",
            Category::Masters1000 => "Masters 1000",
            Category::Atp500 => "ATP 500",
            Category::Atp250 => "ATP 250",
        }
    }
}

impl FromStr for Category {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grand Slam" => Ok(Category::GrandSlam),
            "Masters 1000" => Ok(Category::Masters1000),
            "ATP 500" => Ok(Category::Atp500),
            "ATP 250" => Ok(Category::Atp250),
            other => Err(AnalyticsError::invalid(format!("unknown category '{other}'"))),
        }
    }
}

/// Elimination stage of a match. Codes do not sort lexicographically by
/// depth, so ordering goes through [`Round::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Round {
    R128,
    R64,
    R32,
    R16,
    QF,
    SF,
    F,
}

impl Round {
    /// Position in a draw listing: the final is 1, the first round of a
    /// 128 draw is 7.
    pub fn rank(&self) -> u8 {
        match self {
            Round::F => 1,
            Round::SF => 2,
            Round::QF => 3,
            Round::R16 => 4,
            Round::R32 => 5,
            Round::R64 => 6,
            Round::R128 => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Round::R128 => "R128",
            Round::R64 => "R64",
            Round::R32 => "R32",
            Round::R16 => "R16",
            Round::QF => "QF",
            Round::SF => "SF",
            Round::F => "F",
        }
    }
}

impl FromStr for Round {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R128" => Ok(Round::R128),
            "R64" => Ok(Round::R64),
            "R32" => Ok(Round::R32),
            "R16" => Ok(Round::R16),
            "QF" => Ok(Round::QF),
            "SF" => Ok(Round::SF),
            "F" => Ok(Round::F),
            other => Err(AnalyticsError::invalid(format!("unknown round '{other}'"))),
        }
    }
}

macro_rules! text_enum_sql {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl ToSql for $ty {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.as_str()))
                }
            }

            impl FromSql for $ty {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|e: AnalyticsError| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

text_enum_sql!(Surface, Category, Round);
