use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use bic_registry::RegistryError;

/// Server-lifecycle errors (bind, config). Request-level failures are
/// [`ApiError`].
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server-lifecycle operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// A request-level failure, rendered as `{"detail": "..."}` with the
/// status implied by the error class.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request body could not be deserialized into the expected shape
    /// (wrong types, missing required fields, malformed JSON).
    #[error("invalid request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::CodeNotFound(_))
            | Self::Registry(RegistryError::CountryNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Registry(RegistryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Registry(RegistryError::InvalidFormat(_)) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Registry(RegistryError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
