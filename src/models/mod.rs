// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for both client shells.

pub mod dashboard;
pub mod lenient;
pub mod profile;
pub mod user;

pub use dashboard::{
    AthleteDashboard, ClubInfo, CoachDashboard, Dashboard, ManagerDashboard, NewsItem,
};
pub use profile::{Profile, Provider};
pub use user::{LoginResponse, Role, Session, User};
