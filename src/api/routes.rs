use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    players::{get_head_to_head, get_record, get_surface_breakdown, resolve_player},
    schema::{describe_table, list_tables},
    tournaments::{get_draw, get_match_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players/resolve", get(resolve_player))
        .route("/api/players/:player/record", get(get_record))
        .route("/api/players/:player/surfaces", get(get_surface_breakdown))
        .route("/api/head-to-head/:first/:second", get(get_head_to_head))
        .route("/api/tournaments/:id/draw", get(get_draw))
        .route("/api/matches/:id/stats", get(get_match_stats))
        .route("/api/tables", get(list_tables))
        .route("/api/tables/:name", get(describe_table))
        .with_state(state)
}
