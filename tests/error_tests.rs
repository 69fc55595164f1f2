// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use courtside::error::AppError;

const BACKEND: &str = "http://localhost:5000";

#[test]
fn test_user_messages() {
    assert_eq!(
        AppError::Connection("refused".to_string()).user_message(BACKEND),
        "Connection error. Make sure the backend is running on http://localhost:5000"
    );
    assert_eq!(
        AppError::Api("Email already registered".to_string()).user_message(BACKEND),
        "Email already registered"
    );
    assert_eq!(
        AppError::InvalidCredentials.user_message(BACKEND),
        "Sign-in failed: Invalid credentials"
    );
    assert_eq!(
        AppError::NotAuthenticated.user_message(BACKEND),
        "Please login first"
    );
    assert_eq!(
        AppError::OAuthCancelled.user_message(BACKEND),
        "Google sign-in cancelled"
    );
}

#[test]
fn test_status_codes() {
    let cases = [
        (AppError::NotAuthenticated, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::BAD_REQUEST),
        (AppError::OAuthState, StatusCode::BAD_REQUEST),
        (AppError::Connection("x".into()), StatusCode::BAD_GATEWAY),
        (AppError::Api("x".into()), StatusCode::BAD_GATEWAY),
        (AppError::Storage("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}
