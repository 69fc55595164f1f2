// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::path::PathBuf;

/// Default club API root, matching the local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the club REST API (including the `/api/v1` prefix)
    pub api_url: String,
    /// JSON file backing the local key-value store
    pub storage_path: PathBuf,
    /// Port for the local web front
    pub port: u16,
    /// Google OAuth client ID for the mobile sign-in flow
    pub google_client_id: String,
    /// Redirect URI registered with Google for the implicit flow
    pub oauth_redirect_uri: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self::test_default()
    }
}

impl Config {
    /// Config with fixed values and an in-repo storage path, for tests.
    pub fn test_default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from("target/test-storage.json"),
            port: 8080,
            google_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
            oauth_redirect_uri: "http://localhost:8080/oauth/redirect".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid("API_URL", api_url));
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            storage_path: env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".courtside/storage.json")),
            port,
            google_client_id: env::var("GOOGLE_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            oauth_redirect_uri: env::var("OAUTH_REDIRECT_URI")
                .unwrap_or_else(|_| format!("http://localhost:{}/oauth/redirect", port)),
        })
    }
}

/// Strip the path from an API URL, leaving `scheme://host[:port]`.
pub fn backend_origin(api_url: &str) -> String {
    match reqwest::Url::parse(api_url) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => api_url.to_string(),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
