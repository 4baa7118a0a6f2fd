use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Failure of the underlying persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Pool(#[from] r2d2::Error),
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("'{name}' matches {count} players")]
    AmbiguousInput { name: String, count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // The storage message stays in `source()` so query text never reaches callers
    #[error("Storage unavailable")]
    StoreUnavailable(#[source] StoreError),
}

impl AnalyticsError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Stable machine-readable tag used in API error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::AmbiguousInput { .. } => "ambiguous_input",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl From<rusqlite::Error> for AnalyticsError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StoreUnavailable(err.into())
    }
}

impl From<r2d2::Error> for AnalyticsError {
    fn from(err: r2d2::Error) -> Self {
        Self::StoreUnavailable(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_store_error_hides_query_text() {
        let err: AnalyticsError = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(err.to_string(), "Storage unavailable");
        assert_eq!(err.kind(), "store_unavailable");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_not_found_message_names_key() {
        let err = AnalyticsError::not_found("player", "Unknown Person");
        assert_eq!(err.to_string(), "player not found: Unknown Person");
        assert_eq!(err.kind(), "not_found");
    }
}
