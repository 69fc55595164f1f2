// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Courtside: client shells for the Dunes Be One basketball club.
//!
//! This crate provides the club CMS (session handling, role dashboards and
//! a local web front) and the state machines behind the mobile companion
//! app.

pub mod cms;
pub mod config;
pub mod error;
pub mod middleware;
pub mod mobile;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod storage;

use cms::CmsApp;
use tokio::sync::Mutex;

/// Shared application state.
///
/// The web front drives a single CMS instance; every handler takes the lock
/// for its whole run so state transitions never interleave.
pub struct AppState {
    pub app: Mutex<CmsApp>,
}

impl AppState {
    pub fn new(app: CmsApp) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }
}
