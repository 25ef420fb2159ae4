use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::store::StoreError;

/// Domain failures surfaced by the room registry and the application ledger.
///
/// Every variant is recoverable and scoped to a single operation. `Store`
/// wraps persistence failures whose outcome is unknown to the caller and must
/// be treated as non-committed.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("room '{room}' is full")]
    RoomFull { room: String },
    #[error("{0}")]
    Conflict(String),
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl PortalError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::RoomFull { .. } | PortalError::Conflict(_) => StatusCode::CONFLICT,
            PortalError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
