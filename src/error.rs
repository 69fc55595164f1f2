// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type shared by both client shells.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The backend could not be reached at all (connection refused, DNS, ...).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend answered with a business error or an unusable body.
    #[error("API error: {0}")]
    Api(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Google sign-in cancelled")]
    OAuthCancelled,

    #[error("OAuth state mismatch")]
    OAuthState,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Fallback text when the backend gives no `error` field.
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";

    /// Text shown to the user in an alert for this error.
    ///
    /// `backend` is the origin the client talks to; it is named in
    /// connection errors so the user knows what should be running.
    pub fn user_message(&self, backend: &str) -> String {
        match self {
            AppError::Connection(_) => format!(
                "Connection error. Make sure the backend is running on {}",
                backend
            ),
            AppError::Api(msg) => msg.clone(),
            AppError::InvalidCredentials => "Sign-in failed: Invalid credentials".to_string(),
            AppError::NotAuthenticated => "Please login first".to_string(),
            AppError::OAuthCancelled => "Google sign-in cancelled".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("invalid response body: {}", err))
        } else {
            AppError::Connection(err.to_string())
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::InvalidCredentials => (StatusCode::BAD_REQUEST, "invalid_credentials", None),
            AppError::OAuthCancelled | AppError::OAuthState => {
                (StatusCode::BAD_REQUEST, "oauth_error", Some(self.to_string()))
            }
            AppError::Connection(msg) => {
                tracing::warn!(error = %msg, "Backend unreachable");
                (StatusCode::BAD_GATEWAY, "connection_error", Some(msg.clone()))
            }
            AppError::Api(msg) => (StatusCode::BAD_GATEWAY, "api_error", Some(msg.clone())),
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, AppError>;
