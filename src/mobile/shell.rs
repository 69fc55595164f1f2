// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mobile app shell.
//!
//! Tracks three independent things: whether boot has finished, who (if
//! anyone) is signed in, and whether the splash overlay is still up. The
//! screen stack is derived from the auth state.
//!
//! Sessions are offline-first: a persisted profile signs the user in at
//! boot without asking any backend.

use crate::error::AppError;
use crate::mobile::animation::SplashTimeline;
use crate::mobile::theme::{ThemeController, ThemeMode};
use crate::mobile::videos::Video;
use crate::models::Profile;
use crate::services::google_oauth::{parse_redirect, GoogleOAuth};
use crate::storage::{keys, LocalStore};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Booting,
    Booted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splash {
    Visible,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    Home,
    Player(Video),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::SignIn => "Sign In",
            Screen::Home => "EOEX Market",
            Screen::Player(_) => "Now Playing",
        }
    }
}

/// Local sign-in form.
#[derive(Debug, Validate)]
struct LocalCredentials {
    #[validate(contains(pattern = "@"))]
    email: String,
    #[validate(length(min = 6))]
    password: String,
}

pub struct MobileShell {
    /// Plain key-value storage (profile, theme).
    store: LocalStore,
    /// Secure storage (OAuth token, theme mirror).
    secure: LocalStore,
    boot: BootState,
    profile: Option<Profile>,
    splash: Splash,
    stack: Vec<Screen>,
    theme: ThemeController,
}

impl MobileShell {
    pub fn new(store: LocalStore, secure: LocalStore) -> Self {
        let theme = ThemeController::boot(store.clone(), secure.clone(), None);
        Self {
            store,
            secure,
            boot: BootState::Booting,
            profile: None,
            splash: Splash::Visible,
            stack: vec![Screen::SignIn],
            theme,
        }
    }

    /// Restore the persisted profile and theme. Any stored profile is
    /// trusted; nothing is checked remotely.
    pub fn boot(&mut self, system_theme: Option<ThemeMode>) {
        self.theme = ThemeController::boot(self.store.clone(), self.secure.clone(), system_theme);
        self.profile = self.store.load::<Profile>(keys::MOBILE_SESSION);
        if let Some(profile) = &self.profile {
            tracing::info!(email = %profile.email, provider = ?profile.provider, "Restored mobile session");
        }
        self.reset_stack();
        self.boot = BootState::Booted;
    }

    pub fn boot_state(&self) -> BootState {
        self.boot
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    pub fn splash(&self) -> Splash {
        self.splash
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeController {
        &mut self.theme
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn current_screen(&self) -> &Screen {
        // The stack always holds its root.
        &self.stack[self.stack.len() - 1]
    }

    /// Email/password sign-in. Only the form shape is checked.
    pub async fn sign_in_local(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let form = LocalCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "Rejected local sign-in");
            return Err(AppError::InvalidCredentials);
        }

        let profile = Profile::local(email);
        self.store.save(keys::MOBILE_SESSION, &profile).await?;
        tracing::info!(email = %profile.email, "Local sign-in");
        self.set_profile(profile);
        Ok(())
    }

    /// Finish a Google sign-in with an already fetched profile.
    pub async fn sign_in_google(
        &mut self,
        profile: Profile,
        access_token: Option<&str>,
    ) -> Result<(), AppError> {
        self.store.save(keys::MOBILE_SESSION, &profile).await?;
        if let Some(token) = access_token.filter(|t| !t.is_empty()) {
            self.secure.set_raw(keys::MOBILE_TOKEN, token).await?;
        }
        tracing::info!(email = %profile.email, "Google sign-in");
        self.set_profile(profile);
        Ok(())
    }

    /// Finish the Google flow from the URL the consent page redirected to.
    ///
    /// A cancelled or mismatched redirect leaves the shell signed out and
    /// never reaches the userinfo endpoint.
    pub async fn complete_google_sign_in(
        &mut self,
        oauth: &GoogleOAuth,
        redirect_url: &str,
        expected_state: &str,
    ) -> Result<(), AppError> {
        let token = parse_redirect(redirect_url, expected_state)?;
        let profile = oauth.fetch_profile(&token).await?;
        self.sign_in_google(profile, Some(token.as_str())).await
    }

    pub async fn sign_out(&mut self) -> Result<(), AppError> {
        self.store.clear(keys::MOBILE_SESSION).await?;
        self.secure.clear(keys::MOBILE_TOKEN).await?;
        self.profile = None;
        self.reset_stack();
        tracing::info!("Signed out");
        Ok(())
    }

    /// Push the player for `video`. Ignored when signed out.
    pub fn open_player(&mut self, video: Video) {
        if self.is_authenticated() {
            self.stack.push(Screen::Player(video));
        }
    }

    /// Pop one screen; the root stays.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Drive the splash overlay. Returns true only on the call that
    /// dismisses it.
    pub fn advance_splash(&mut self, elapsed_ms: u64) -> bool {
        if self.splash == Splash::Visible && SplashTimeline::default().is_finished(elapsed_ms) {
            self.splash = Splash::Dismissed;
            return true;
        }
        false
    }

    fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.reset_stack();
    }

    fn reset_stack(&mut self) {
        let root = if self.is_authenticated() {
            Screen::Home
        } else {
            Screen::SignIn
        };
        self.stack = vec![root];
    }
}
