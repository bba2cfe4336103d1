//! HTTP error mapping
//!
//! Maps the [`BankError`] taxonomy onto status codes:
//! caller-input errors become 400, missing resources 404, and store or
//! recording failures 500. The body is always `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::types::BankError;

/// Error wrapper for handler results
#[derive(Debug)]
pub struct ApiError(pub BankError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn status_for(err: &BankError) -> StatusCode {
    match err {
        BankError::AccountNotFound { .. } | BankError::TransactionNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        BankError::InvalidOperationKind { .. }
        | BankError::InvalidAmount { .. }
        | BankError::InvalidRequest { .. }
        | BankError::InsufficientFunds { .. }
        | BankError::ArithmeticOverflow { .. } => StatusCode::BAD_REQUEST,
        BankError::StoreUnavailable { .. } | BankError::RecordingFailed { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<BankError> for ApiError {
    fn from(err: BankError) -> Self {
        Self(err)
    }
}
