use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
};
use std::sync::Arc;

use super::{rejected, run_query, AppState};
use crate::analytics::{self, resolver, PlayerRef};
use crate::api::models::{ResolveParams, ResolvedPlayer};

pub async fn resolve_player(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ResolveParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected(rejection),
    };

    run_query(state, move |conn| {
        let player_id = resolver::resolve_player_id(conn, &params.name)?;
        Ok(ResolvedPlayer {
            player_id,
            name: params.name,
        })
    })
    .await
}

pub async fn get_record(
    State(state): State<Arc<AppState>>,
    player: Result<Path<String>, PathRejection>,
) -> Response {
    let player = match player {
        Ok(Path(player)) => PlayerRef::parse(&player),
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| analytics::player_record(conn, &player)).await
}

pub async fn get_surface_breakdown(
    State(state): State<Arc<AppState>>,
    player: Result<Path<String>, PathRejection>,
) -> Response {
    let player = match player {
        Ok(Path(player)) => PlayerRef::parse(&player),
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| analytics::surface_breakdown(conn, &player)).await
}

pub async fn get_head_to_head(
    State(state): State<Arc<AppState>>,
    players: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let (first, second) = match players {
        Ok(Path((first, second))) => (PlayerRef::parse(&first), PlayerRef::parse(&second)),
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| analytics::head_to_head(conn, &first, &second)).await
}
