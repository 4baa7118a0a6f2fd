//! Reference dataset loaded into empty tables at bootstrap.

use chrono::NaiveDate;

use super::models::{Category, NewMatch, NewMatchStat, NewPlayer, NewTournament, Round, Surface};

// first name, last name, country, birthdate
const PLAYERS: &[(&str, &str, &str, (i32, u32, u32))] = &[
    ("Rafael", "Nadal", "Spain", (1986, 6, 3)),
    ("Novak", "Djokovic", "Serbia", (1987, 5, 22)),
    ("Roger", "Federer", "Switzerland", (1981, 8, 8)),
    ("Carlos", "Alcaraz", "Spain", (2003, 5, 5)),
    ("Daniil", "Medvedev", "Russia", (1996, 2, 11)),
    ("Stefanos", "Tsitsipas", "Greece", (1998, 8, 12)),
];

// name, location, surface, start, end, category
#[allow(clippy::type_complexity)]
const TOURNAMENTS: &[(&str, &str, Surface, (i32, u32, u32), (i32, u32, u32), Category)] = &[
    ("Wimbledon", "London, UK", Surface::Grass, (2025, 7, 1), (2025, 7, 14), Category::GrandSlam),
    ("US Open", "New York, USA", Surface::Hard, (2025, 8, 25), (2025, 9, 8), Category::GrandSlam),
    ("Madrid Open", "Madrid, Spain", Surface::Clay, (2025, 5, 1), (2025, 5, 12), Category::Masters1000),
];

// tournament, player1, player2, round, date, winner, score
#[allow(clippy::type_complexity)]
const MATCHES: &[(i64, i64, i64, Round, (i32, u32, u32), i64, &str)] = &[
    (1, 1, 2, Round::F, (2025, 7, 14), 2, "7-6,6-4,7-6"),
    (1, 3, 4, Round::SF, (2025, 7, 12), 3, "6-4,6-4,6-4"),
    (2, 2, 5, Round::QF, (2025, 9, 3), 2, "6-3,7-6,7-5"),
];

// match, player, aces, double faults, first serves in/total, break points converted/total
const MATCH_STATS: &[(i64, i64, i32, i32, i32, i32, i32, i32)] = &[
    (1, 1, 5, 2, 45, 60, 2, 5),
    (1, 2, 12, 1, 50, 65, 3, 6),
    (2, 3, 15, 0, 48, 62, 3, 4),
    (2, 4, 8, 3, 40, 58, 1, 5),
];

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar days")
}

pub fn players() -> Vec<NewPlayer<'static>> {
    PLAYERS
        .iter()
        .map(|&(first_name, last_name, country, birthdate)| NewPlayer {
            first_name,
            last_name,
            country,
            birthdate: ymd(birthdate),
        })
        .collect()
}

pub fn tournaments() -> Vec<NewTournament<'static>> {
    TOURNAMENTS
        .iter()
        .map(|&(name, location, surface, start, end, category)| NewTournament {
            name,
            location,
            surface,
            start_date: ymd(start),
            end_date: ymd(end),
            category,
        })
        .collect()
}

pub fn matches() -> Vec<NewMatch<'static>> {
    MATCHES
        .iter()
        .map(
            |&(tournament_id, player1_id, player2_id, round, date, winner_id, score)| NewMatch {
                tournament_id,
                player1_id,
                player2_id,
                round,
                match_date: ymd(date),
                winner_id,
                score,
            },
        )
        .collect()
}

pub fn match_stats() -> Vec<NewMatchStat> {
    MATCH_STATS
        .iter()
        .map(
            |&(match_id, player_id, aces, double_faults, fs_in, fs_total, bp_won, bp_total)| {
                NewMatchStat {
                    match_id,
                    player_id,
                    aces,
                    double_faults,
                    first_serves_in: fs_in,
                    first_serves_total: fs_total,
                    break_points_converted: bp_won,
                    break_points_total: bp_total,
                }
            },
        )
        .collect()
}
