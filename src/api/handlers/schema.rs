use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{rejected, run_query, AppState};
use crate::api::models::TableList;
use crate::database::setup;

pub async fn list_tables(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    run_query(state, |conn| {
        setup::list_tables(conn).map(|tables| TableList { tables })
    })
    .await
}

pub async fn describe_table(
    State(state): State<Arc<AppState>>,
    table: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(table) = match table {
        Ok(path) => path,
        Err(rejection) => return rejected(rejection),
    };
    run_query(state, move |conn| setup::describe_table(conn, &table)).await
}
