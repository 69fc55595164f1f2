// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club login and logout routes.

use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
    routing::post,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::routes::pages::page;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Submit the login form. Renders the dashboard on success; otherwise the
/// home page comes back with the modal open and the failure alert.
async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Result<Html<String>> {
    let mut app = state.app.lock().await;

    match app.login(&form.email, &form.password).await {
        Ok(()) => {}
        Err(e @ (AppError::Storage(_) | AppError::Internal(_))) => return Err(e),
        Err(_) => app.show_login(),
    }

    Ok(page(&mut app))
}

async fn logout(State(state): State<Arc<AppState>>) -> Redirect {
    state.app.lock().await.logout().await;
    Redirect::to("/")
}
