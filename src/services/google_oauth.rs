// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google OAuth sign-in for the mobile shell.
//!
//! Uses the implicit flow: the user is sent to Google's consent page, the
//! redirect carries an access token in its fragment, and the token is
//! exchanged for an email and display name at the userinfo endpoint.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Profile, Provider};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use ring::rand::{SecureRandom, SystemRandom};
use serde::Deserialize;

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const SCOPES: &str = "profile email";
const STATE_BYTES: usize = 16;

/// Userinfo response (only the fields we keep).
#[derive(Debug, Deserialize)]
struct UserInfo {
    email: Option<String>,
    name: Option<String>,
}

/// Google OAuth client.
#[derive(Clone)]
pub struct GoogleOAuth {
    http: reqwest::Client,
    client_id: String,
    redirect_uri: String,
    userinfo_url: String,
}

impl GoogleOAuth {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: config.google_client_id.clone(),
            redirect_uri: config.oauth_redirect_uri.clone(),
            userinfo_url: USERINFO_URL.to_string(),
        }
    }

    /// Point userinfo lookups somewhere else (local fakes in tests).
    pub fn with_userinfo_url(mut self, url: impl Into<String>) -> Self {
        self.userinfo_url = url.into();
        self
    }

    /// Consent page URL for a fresh sign-in attempt.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=token&scope={}&state={}",
            AUTHORIZE_URL,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(SCOPES),
            urlencoding::encode(state),
        )
    }

    /// Exchange an access token for the user's profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Profile, AppError> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Google userinfo request rejected");
            return Err(AppError::Api(format!("userinfo HTTP {}: {}", status, body)));
        }

        let info: UserInfo = response.json().await?;
        let email = info
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::Api("userinfo response missing email".to_string()))?;

        tracing::info!(email = %email, "Google profile fetched");

        Ok(Profile {
            email,
            name: info.name,
            provider: Provider::Google,
        })
    }
}

/// Random, URL-safe value for the `state` parameter.
pub fn new_state() -> Result<String, AppError> {
    let mut bytes = [0u8; STATE_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG unavailable")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Pull the access token out of the redirect Google sent the user back to.
///
/// The implicit flow returns parameters in the fragment; the query is
/// checked as well. Any `error`, or a missing token, means the user
/// cancelled. A `state` that differs from `expected_state` is rejected.
pub fn parse_redirect(redirect_url: &str, expected_state: &str) -> Result<String, AppError> {
    let url = reqwest::Url::parse(redirect_url)
        .map_err(|e| AppError::Api(format!("invalid redirect URL: {}", e)))?;

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some(fragment) = url.fragment() {
        params.extend(
            reqwest::Url::parse(&format!("http://fragment.invalid/?{}", fragment))
                .map(|u| {
                    u.query_pairs()
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
        );
    }

    let get = |name: &str| {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    };

    if let Some(error) = get("error") {
        tracing::info!(error, "Google sign-in returned an error");
        return Err(AppError::OAuthCancelled);
    }

    if get("state") != Some(expected_state) {
        tracing::warn!("OAuth state mismatch on redirect");
        return Err(AppError::OAuthState);
    }

    get("access_token")
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or(AppError::OAuthCancelled)
}
