// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every failure surfaces to the caller as the same 500 body; which upstream
//! call failed is only visible in the message text and the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing Strava API credentials")]
    MissingCredentials,

    #[error("Token refresh failed: {}", .0.as_u16())]
    TokenRefresh(StatusCode),

    #[error("{0}")]
    StravaApi(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Internal server error");
            }
            other => {
                tracing::error!(error = %other, "Strava API Error");
            }
        }

        let body = ErrorResponse {
            error: true,
            message: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
