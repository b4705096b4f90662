use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::translate;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("slot conflict: {0}")]
    SlotConflict(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("booking service unreachable: {0}")]
    Unreachable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotConflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unreachable(_) => StatusCode::BAD_GATEWAY,
        };

        let mut body = serde_json::json!({ "error": self.to_string() });

        // Upstream failures carry a localized message for display.
        match &self {
            AppError::Upstream(raw) | AppError::SlotConflict(raw) | AppError::Unreachable(raw) => {
                body["userMessage"] =
                    serde_json::Value::String(translate::user_friendly_error(raw));
            }
            _ => {}
        }

        (status, axum::Json(body)).into_response()
    }
}
