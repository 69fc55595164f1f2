// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote collaborators.

pub mod api;
pub mod google_oauth;

pub use api::ApiClient;
pub use google_oauth::GoogleOAuth;
