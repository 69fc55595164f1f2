// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page navigation routes.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::cms::{CmsApp, Navigation, Page};
use crate::render::render_page;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
}

#[derive(Deserialize)]
pub struct HomeParams {
    /// `login` opens the login modal, `none` closes it.
    #[serde(default)]
    modal: Option<String>,
}

async fn home(State(state): State<Arc<AppState>>, Query(params): Query<HomeParams>) -> Html<String> {
    let mut app = state.app.lock().await;
    app.navigate_to(Page::Home).await;

    match params.modal.as_deref() {
        Some("login") => app.show_login(),
        Some("none") => app.close_login(),
        _ => {}
    }

    page(&mut app)
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut app = state.app.lock().await;
    if app.navigate_to(Page::Dashboard).await == Navigation::LoginRequired {
        tracing::debug!("Dashboard requested without a session");
    }
    page(&mut app)
}

/// Render the current state and drain pending alerts into it.
pub(crate) fn page(app: &mut CmsApp) -> Html<String> {
    let alerts = app.take_alerts();
    Html(render_page(app, &alerts))
}
