//! Server-wide error type and the classifier that renders it
//!
//! Every fallible operation in the API surfaces an [`AppError`]. Rendering
//! runs a fixed chain:
//!
//! 1. storage codes: SQLSTATEs that mean the client sent something unusable
//! 2. application statuses: validation failures and missing records
//! 3. fallback: logged, rendered as a bare 500
//!
//! The response body is always `{"msg": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::features::shared::validation::ValidationError;

/// Message for every 400 response
pub const BAD_REQUEST_MSG: &str = "Bad request";

/// Message for every 500 response
pub const INTERNAL_ERROR_MSG: &str = "Internal server errors";

/// SQLSTATEs reported to the client as a bad request
///
/// - `22P02` invalid text representation
/// - `23503` foreign key violation
/// - `23502` not-null violation
/// - `22003` numeric value out of range
/// - `2201W` invalid row count in LIMIT
/// - `23505` unique violation
pub const BAD_REQUEST_SQLSTATES: [&str; 6] =
    ["22P02", "23503", "23502", "22003", "2201W", "23505"];

pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Map the error to its HTTP status and client-facing message
    pub fn classify(&self) -> (StatusCode, String) {
        storage_code_stage(self)
            .or_else(|| application_status_stage(self))
            .unwrap_or_else(|| fallback_stage(self))
    }
}

fn storage_code_stage(err: &AppError) -> Option<(StatusCode, String)> {
    let AppError::Database(sqlx::Error::Database(db_err)) = err else {
        return None;
    };
    let code = db_err.code()?;
    if !BAD_REQUEST_SQLSTATES.iter().any(|known| *known == code) {
        return None;
    }

    tracing::debug!(sqlstate = %code, error = %db_err, "Statement rejected by database");
    Some((StatusCode::BAD_REQUEST, BAD_REQUEST_MSG.to_string()))
}

fn application_status_stage(err: &AppError) -> Option<(StatusCode, String)> {
    match err {
        AppError::Validation(detail) => {
            tracing::debug!(%detail, "Request failed validation");
            Some((StatusCode::BAD_REQUEST, BAD_REQUEST_MSG.to_string()))
        },
        AppError::NotFound(message) => Some((StatusCode::NOT_FOUND, message.clone())),
        AppError::Database(_) | AppError::Internal(_) => None,
    }
}

fn fallback_stage(err: &AppError) -> (StatusCode, String) {
    tracing::error!(error = %err, "Unhandled error");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.classify();
        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
