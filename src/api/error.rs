use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::error::Error as _;

use crate::api::models::ErrorBody;
use crate::errors::AnalyticsError;

/// Renders an [`AnalyticsError`] as a JSON payload with a matching status.
pub struct ApiError(pub AnalyticsError);

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AnalyticsError::NotFound { .. } => StatusCode::NOT_FOUND,
            AnalyticsError::AmbiguousInput { .. } => StatusCode::CONFLICT,
            AnalyticsError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AnalyticsError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if let Some(source) = self.0.source() {
            log::error!("Query failed: {}", source);
        }

        let body = ErrorBody {
            error: self.0.kind(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
