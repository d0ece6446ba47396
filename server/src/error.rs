//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] stacks_ledger::Error),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    #[allow(dead_code)]
    Unauthorized,

    #[error("Internal error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        use stacks_ledger::Error as LedgerError;

        match self {
            AppError::Ledger(e) => match e {
                LedgerError::BookNotFound(_)
                | LedgerError::MemberNotFound(_)
                | LedgerError::LoanNotFound(_)
                | LedgerError::FineNotFound(_) => StatusCode::NOT_FOUND,
                LedgerError::NoCopiesAvailable(_)
                | LedgerError::AlreadyReturned(_)
                | LedgerError::LoanLimitReached(_, _)
                | LedgerError::MemberNotActive { .. } => StatusCode::CONFLICT,
                LedgerError::InvalidCopyCount { .. }
                | LedgerError::InvalidSnapshot(_)
                | LedgerError::SnapshotVersionMismatch { .. } => StatusCode::BAD_REQUEST,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, details) = match &self {
            AppError::Ledger(e) => {
                tracing::warn!("Ledger error: {:?}", e);
                (e.to_string(), None)
            }
            AppError::BadRequest(msg) => (msg.clone(), None),
            AppError::NotFound(msg) => (msg.clone(), None),
            AppError::Unauthorized => ("Unauthorized".to_string(), None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error".to_string(), Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
