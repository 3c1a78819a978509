// models/src/errors.rs
pub use thiserror::Error;

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;

/// The error surface of the whole API. Three kinds matter to callers:
/// not-found, bad-request, and everything else, which is surfaced as a
/// generic internal error carrying the underlying display string.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Graph store error: {0}")]
    Store(String),
    #[error("TMDB request failed: {0}")]
    External(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("An internal error occurred: {0}")]
    Internal(String),
}

impl From<neo4rs::Error> for ApiError {
    fn from(err: neo4rs::Error) -> Self {
        ApiError::Store(err.to_string())
    }
}

impl From<neo4rs::DeError> for ApiError {
    fn from(err: neo4rs::DeError) -> Self {
        ApiError::Store(format!("row decode failed: {}", err))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::External(err.to_string())
    }
}

impl From<SerdeJsonError> for ApiError {
    fn from(err: SerdeJsonError) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// A type alias for a `Result` that returns an `ApiError` on failure.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn should_render_not_found_with_subject() {
        let err = ApiError::NotFound("Actor Tom Hanks".to_string());
        assert_eq!(err.to_string(), "Actor Tom Hanks not found");
    }

    #[test]
    fn should_wrap_json_errors_as_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
