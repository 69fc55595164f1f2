// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courtside local web front
//!
//! Serves the club CMS on localhost, talking to the club REST API and
//! keeping the session in a JSON file between runs.

use courtside::{
    cms::CmsApp, config::Config, services::ApiClient, storage::LocalStore, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        api_url = %config.api_url,
        "Starting Courtside"
    );

    // Open persisted key-value storage
    tracing::info!(path = %config.storage_path.display(), "Opening local storage");
    let store = LocalStore::open(&config.storage_path).await?;

    let api = ApiClient::new(&config.api_url);
    let app = CmsApp::boot(api, store);

    // Build shared state
    let state = Arc::new(AppState::new(app));

    // Build router
    let router = courtside::routes::create_router(state);

    // Start server
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, router).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("courtside=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
