use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rusqlite::Connection;
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::database::{self, DbPool};
use crate::errors::{self, AnalyticsError};

pub mod players;
pub mod schema;
pub mod tournaments;

pub struct AppState {
    pub pool: DbPool,
}

/// Extractor rejections (unparsable path segments, missing query
/// parameters) use the same JSON error body as query failures.
pub(crate) fn rejected(rejection: impl std::fmt::Display) -> Response {
    ApiError(AnalyticsError::invalid(rejection.to_string())).into_response()
}

/// Runs a blocking query on its own pooled connection and renders the
/// outcome. The connection goes back to the pool when the task ends.
pub(crate) async fn run_query<T, F>(state: Arc<AppState>, query: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&Connection) -> errors::Result<T> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || {
        let conn = database::get_connection(&state.pool)?;
        query(&conn)
    })
    .await;

    match outcome {
        Ok(Ok(body)) => Json(body).into_response(),
        Ok(Err(e)) => ApiError(e).into_response(),
        Err(e) => {
            log::error!("Query task failed: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
