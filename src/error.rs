//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Any failure while running a statement: connectivity, constraint
/// violation, bad input rejected by a cast.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Server-level fallback for routes that do not recover locally: a bare 500.
impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "unhandled storage failure");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Failure recovered by a handler, rendered as a 500 in the handler's chosen format.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("{context}: {source}")]
    Text {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const TEXT_ERROR_MESSAGE: &str = "Server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Json { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE,
                    }),
                )
                    .into_response()
            }
            AppError::Text { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, TEXT_ERROR_MESSAGE).into_response()
            }
        }
    }
}

/// Attach a handler's recovery format and log context to a storage result.
pub trait StorageResultExt<T> {
    fn or_json(self, context: &'static str) -> Result<T, AppError>;
    fn or_text(self, context: &'static str) -> Result<T, AppError>;
}

impl<T> StorageResultExt<T> for Result<T, StorageError> {
    fn or_json(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Json { context, source })
    }

    fn or_text(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Text { context, source })
    }
}
