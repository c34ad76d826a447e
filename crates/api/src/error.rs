use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use vtpartner_core::error::{CoreError, NO_DATA_FOUND};
use vtpartner_maps::DistanceMatrixError;

use crate::upload::UploadError;

/// Body message of every sanitized 500.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body of a failed `/distance` lookup (sent under `error`, not `message`).
pub const DISTANCE_ERROR: &str = "Error fetching distance data";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure becomes a JSON body of the
/// form `{ "message": ... }` (or `{ "error": ... }` for the distance proxy).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vtpartner_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Image upload failure.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Distance Matrix lookup failure.
    #[error(transparent)]
    Distance(#[from] DistanceMatrixError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body over the configured size limit.
    #[error("Request body too large")]
    PayloadTooLarge,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::MissingFields(_) | CoreError::Validation(_) => {
                    tracing::warn!(error = %core, "Rejected request");
                    (StatusCode::BAD_REQUEST, core.to_string())
                }
                CoreError::NotFound => (StatusCode::NOT_FOUND, NO_DATA_FOUND.to_string()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Upload(err) => {
                let status = err.status();
                if status.is_server_error() {
                    tracing::error!(error = %err, "Upload failed");
                } else {
                    tracing::warn!(error = %err, "Upload rejected");
                }
                (status, err.public_message().to_string())
            }

            AppError::Distance(err) => {
                tracing::error!(error = %err, "Distance Matrix lookup failed");
                let body = json!({ "error": DISTANCE_ERROR });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - Unique constraint violations (PostgreSQL `23505`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            tracing::warn!(
                constraint = db_err.constraint().unwrap_or("unknown"),
                "Unique constraint violation"
            );
            (StatusCode::CONFLICT, "Duplicate record".to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_SERVER_ERROR.to_string(),
            )
        }
    }
}
