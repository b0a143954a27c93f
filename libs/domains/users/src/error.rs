//! Error taxonomy for the users domain.
//!
//! Every variant carries the exact client-facing message returned in the
//! JSON body; the `IntoResponse` impl maps variants to status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_helpers::errors::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid JSON body")]
    InvalidJsonBody,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Invalid user ID")]
    InvalidUserId,

    #[error("User not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::InvalidJsonBody
            | UserError::EmptyName
            | UserError::InvalidEmailFormat
            | UserError::InvalidUserId => (StatusCode::BAD_REQUEST, self.to_string()),
            UserError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            UserError::Storage(detail) => {
                // Detail goes to the log, never to the client.
                tracing::error!(error = %detail, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
