use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stringlens_core::Error;
use tracing::error;

/// Error returned by handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Core(Error),
    /// The request body could not be read as JSON.
    BadRequest(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Core(err)
    }
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Core(Error::Validation(_) | Error::ConflictingQuery) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Core(Error::Duplicate) => StatusCode::CONFLICT,
            Self::Core(Error::NotFound) => StatusCode::NOT_FOUND,
            Self::Core(Error::Filter(_) | Error::UnparseableQuery) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Core(Error::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Core(Error::Storage(_)) => "Internal server error".to_string(),
            Self::Core(err) => err.to_string(),
            Self::BadRequest(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Core(Error::Storage(err)) = &self {
            error!("Storage failure: {err:#}");
        }
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
