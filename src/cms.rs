// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club CMS application shell.
//!
//! [`CmsApp`] owns the session, the visible page, the login modal and the
//! rendered dashboard. It is the only writer of that state; the web front
//! holds one instance behind a lock.
//!
//! The persisted session is a mirror of the in-memory one. It seeds memory
//! at boot and is otherwise only written by login and cleared by logout.

use crate::config::backend_origin;
use crate::error::AppError;
use crate::models::{Dashboard, Role, Session, User};
use crate::render::dashboard;
use crate::services::ApiClient;
use crate::storage::{keys, LocalStore};

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
}

/// Visibility of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Hidden,
    Visible,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Shown(Page),
    /// The dashboard was requested without a session; the login modal is
    /// open instead and the request is dropped.
    LoginRequired,
}

/// Alert text for unauthenticated dashboard access.
pub const LOGIN_FIRST: &str = "Please login first";

/// Club CMS client state.
pub struct CmsApp {
    api: ApiClient,
    store: LocalStore,
    session: Option<Session>,
    page: Page,
    login_modal: Modal,
    dashboard_html: String,
    alerts: Vec<String>,
}

impl CmsApp {
    /// Build the app, restoring a persisted session when both halves exist.
    ///
    /// The restored session is trusted as-is; it is not revalidated against
    /// the backend until a request fails.
    pub fn boot(mut api: ApiClient, store: LocalStore) -> Self {
        let token = store.get_raw(keys::AUTH_TOKEN).filter(|t| !t.is_empty());
        let user = store.load::<User>(keys::USER);

        let session = match (token, user) {
            (Some(token), Some(user)) => {
                api.set_token(token.clone());
                tracing::info!(user_id = user.id, role = %user.role, "Restored session");
                Some(Session { token, user })
            }
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Ignoring half-persisted session");
                None
            }
            (None, None) => None,
        };

        tracing::info!("CMS application initialized");

        Self {
            api,
            store,
            session,
            page: Page::Home,
            login_modal: Modal::Hidden,
            dashboard_html: String::new(),
            alerts: Vec::new(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn login_modal(&self) -> Modal {
        self.login_modal
    }

    pub fn dashboard_html(&self) -> &str {
        &self.dashboard_html
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// `"First (role)"` for the header, when signed in.
    pub fn user_menu_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format!("{} ({})", s.user.first_name, s.user.role))
    }

    /// Drain alerts queued since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    // ─── Modals ──────────────────────────────────────────────────

    pub fn show_login(&mut self) {
        self.login_modal = Modal::Visible;
    }

    pub fn close_login(&mut self) {
        self.login_modal = Modal::Hidden;
    }

    // ─── Navigation ──────────────────────────────────────────────

    /// Switch pages. The dashboard is guarded by the session and is
    /// re-fetched on every visit.
    pub async fn navigate_to(&mut self, page: Page) -> Navigation {
        match page {
            Page::Home => {
                self.page = Page::Home;
                Navigation::Shown(Page::Home)
            }
            Page::Dashboard => {
                if self.session.is_none() {
                    self.alerts.push(LOGIN_FIRST.to_string());
                    self.show_login();
                    return Navigation::LoginRequired;
                }
                self.page = Page::Dashboard;
                self.load_dashboard().await;
                Navigation::Shown(Page::Dashboard)
            }
        }
    }

    /// Fetch and render the dashboard for the signed-in user's role.
    pub async fn load_dashboard(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let role = session.user.role.clone();
        let user_id = session.user.id;

        self.dashboard_html = match role {
            Role::Club => dashboard::CLUB_PLACEHOLDER.to_string(),
            Role::Unknown(_) => dashboard::unsupported_role(&role),
            _ => self.fetch_dashboard(&role, user_id).await,
        };
    }

    async fn fetch_dashboard(&self, role: &Role, user_id: u64) -> String {
        let value = match self.api.dashboard(role, user_id).await {
            Ok(value) => value,
            Err(AppError::Connection(e)) => {
                tracing::error!(error = %e, role = %role, "Dashboard request failed");
                return dashboard::request_failed(role);
            }
            Err(e) => {
                tracing::error!(error = %e, role = %role, "Dashboard response unusable");
                return dashboard::load_failed(role);
            }
        };

        match Dashboard::from_value(role, value) {
            Ok(Some(d)) if d.success() => {
                dashboard::render(&d, chrono::Local::now().date_naive())
            }
            Ok(Some(_)) => dashboard::load_failed(role),
            Ok(None) => dashboard::unsupported_role(role),
            Err(e) => {
                tracing::error!(error = %e, role = %role, "Dashboard payload has wrong shape");
                dashboard::load_failed(role)
            }
        }
    }

    // ─── Authentication ──────────────────────────────────────────

    /// Log in and open the dashboard.
    ///
    /// On failure an alert is queued and the error is returned; the app is
    /// left signed out with the login modal untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let result = match self.api.login(email, password).await {
            Ok(resp) => resp
                .into_session()
                .ok_or_else(|| AppError::Api(AppError::UNKNOWN_ERROR.to_string())),
            Err(e) => Err(e),
        };

        let session = match result {
            Ok(session) => session,
            Err(e) => {
                let message = self.login_failure_message(&e);
                self.alerts.push(message);
                tracing::warn!(error = %e, "Login failed");
                return Err(e);
            }
        };

        // Token and user are two independent writes.
        self.store.set_raw(keys::AUTH_TOKEN, &session.token).await?;
        self.store.save(keys::USER, &session.user).await?;

        tracing::info!(
            user_id = session.user.id,
            role = %session.user.role,
            "Login successful"
        );

        self.api.set_token(session.token.clone());
        self.session = Some(session);
        self.close_login();
        self.navigate_to(Page::Dashboard).await;
        Ok(())
    }

    /// Sign out. Always ends with both persisted keys and both in-memory
    /// fields cleared, whatever the prior state.
    pub async fn logout(&mut self) {
        for key in [keys::AUTH_TOKEN, keys::USER] {
            if let Err(e) = self.store.clear(key).await {
                tracing::error!(key, error = %e, "Failed to clear persisted session key");
            }
        }

        self.api.clear_token();
        self.session = None;
        self.dashboard_html.clear();
        self.navigate_to(Page::Home).await;

        tracing::info!("Logout successful");
    }

    fn login_failure_message(&self, err: &AppError) -> String {
        match err {
            AppError::Api(msg) => format!("Login failed: {}", msg),
            other => other.user_message(&backend_origin(self.api.base_url())),
        }
    }
}
