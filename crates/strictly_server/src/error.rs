//! HTTP-facing error type.

use crate::{RegistryError, SessionId};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use serde::Serialize;
use tracing::debug;

/// Request failure surfaced to HTTP clients.
///
/// A refused word is not an error: it is a normal `valid: false` response.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiError {
    /// `game_id` or `positions` absent, empty or unparseable.
    #[display("Missing game_id or positions")]
    MissingFields,

    /// `game_id` absent from a state query.
    #[display("Missing game_id")]
    MissingGameId,

    /// No live session with this id.
    #[display("Invalid game ID")]
    UnknownSession(SessionId),
}

impl std::error::Error for ApiError {}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => ApiError::UnknownSession(id),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::MissingGameId => StatusCode::BAD_REQUEST,
            ApiError::UnknownSession(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = %status, error = ?self, "Request failed");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
