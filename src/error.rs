use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::ResponseStatus;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied missing, empty or malformed input.
    #[error("{0}")]
    Validation(String),

    /// The primary storage operation of a request failed.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    /// Wrap a storage error with the message prefix reported to the caller.
    pub fn storage(context: impl Into<String>) -> impl FnOnce(DbErr) -> Self {
        let context = context.into();
        move |source| Self::Storage { context, source }
    }
}

/// Error envelope: `{"status": "error", "message": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(msg) => tracing::debug!(message = %msg, "request_rejected"),
            Self::Storage { context, source } => {
                tracing::error!("{context}: {source:?}");
            }
        }

        // Failures travel inside the envelope; the transport status stays 200.
        let body = Json(ErrorResponse {
            status: ResponseStatus::Error,
            message: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
