use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metaclass_core::error::CoreError;

use crate::response::OutcomeResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors for storage
/// failures. Implements [`IntoResponse`] so every failure leaves the
/// boundary as a uniform `{success: false, message}` body; the workflow
/// layers never see a status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `metaclass_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity = %entity, key = %key, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        format!("{entity} non presente nel database"),
                    )
                }
                CoreError::Validation { message, .. } => {
                    (StatusCode::BAD_REQUEST, message.clone())
                }
                CoreError::Auth(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                // State-precondition failures keep the legacy contract:
                // the client sees a 500 with the operation's message.
                CoreError::Conflict(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
                CoreError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Errore durante l'operazione".to_string(),
                )
            }
        };

        (status, axum::Json(OutcomeResponse::fail(message))).into_response()
    }
}
