// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club REST API client.
//!
//! Every request is JSON, and the bearer token is attached whenever one is
//! held. Error statuses are not errors here: the parsed body is handed back
//! and callers inspect its `success`/`error` fields. Only transport failures
//! and unparseable bodies fail.
//!
//! No timeout, retry or backoff is applied.

use crate::error::AppError;
use crate::models::{LoginResponse, Role};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Club API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Issue a request and return the parsed JSON body, whatever the status.
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, AppError> {
        let (_, value) = self.send(path, method, body).await?;
        Ok(value)
    }

    /// `GET` shorthand for [`ApiClient::call`].
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.call(path, Method::GET, None).await
    }

    /// Authenticate with email and password.
    ///
    /// A non-2xx answer becomes `AppError::Api` carrying the backend's
    /// `error` text (or "Unknown error"). A 2xx answer is returned as-is,
    /// even when it lacks a token; the caller decides what that means.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let (status, value) = self.send("/auth/login", Method::POST, Some(&body)).await?;

        if !status.is_success() {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(AppError::UNKNOWN_ERROR)
                .to_string();
            tracing::info!(status = status.as_u16(), error = %message, "Login rejected");
            return Err(AppError::Api(message));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::Api(format!("malformed login response: {}", e)))
    }

    /// Fetch the aggregate dashboard payload for a user of `role`.
    pub async fn dashboard(&self, role: &Role, user_id: u64) -> Result<Value, AppError> {
        let segment = role.dashboard_segment().ok_or_else(|| {
            AppError::Api(format!("no dashboard endpoint for role {}", role))
        })?;
        self.get(&format!("/{}/dashboard/{}", segment, user_id)).await
    }

    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), AppError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, url = %url, error = %e, "API call failed");
            AppError::Connection(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(%method, url = %url, status = status.as_u16(), "API call");

        let value = response.json::<Value>().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "API response was not JSON");
            AppError::Api(format!("invalid response body: {}", e))
        })?;

        Ok((status, value))
    }
}
