use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};
use std::sync::Arc;

use super::{rejected, run_query, AppState};
use crate::analytics;
use crate::database::{MatchId, TournamentId};

pub async fn get_draw(
    State(state): State<Arc<AppState>>,
    tournament_id: Result<Path<TournamentId>, PathRejection>,
) -> Response {
    let Path(tournament_id) = match tournament_id {
        Ok(path) => path,
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| analytics::tournament_draw(conn, tournament_id)).await
}

pub async fn get_match_stats(
    State(state): State<Arc<AppState>>,
    match_id: Result<Path<MatchId>, PathRejection>,
) -> Response {
    let Path(match_id) = match match_id {
        Ok(path) => path,
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| analytics::match_stats(conn, match_id)).await
}
