// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role dashboard payloads.
//!
//! Shapes follow the club API's `/{role}s/dashboard/{id}` responses. Every
//! field is optional; the renderer decides how absent values look.

use crate::models::lenient::{opt_f64, opt_text, truthy, vec_or_null};
use crate::models::Role;
use serde::Deserialize;
use serde_json::Value;

/// A fetched dashboard, tagged by role.
#[derive(Debug, Clone)]
pub enum Dashboard {
    Athlete(AthleteDashboard),
    Coach(CoachDashboard),
    Manager(ManagerDashboard),
    /// Club accounts have no backend dashboard yet.
    Club,
}

impl Dashboard {
    /// Interpret a raw payload for `role`.
    ///
    /// Returns `Ok(None)` for roles without a dashboard schema.
    pub fn from_value(role: &Role, value: Value) -> Result<Option<Self>, serde_json::Error> {
        Ok(Some(match role {
            Role::Athlete => Dashboard::Athlete(serde_json::from_value(value)?),
            Role::Coach => Dashboard::Coach(serde_json::from_value(value)?),
            Role::Manager => Dashboard::Manager(serde_json::from_value(value)?),
            Role::Club => Dashboard::Club,
            Role::Unknown(_) => return Ok(None),
        }))
    }

    /// Whether the backend flagged the payload as successful.
    pub fn success(&self) -> bool {
        match self {
            Dashboard::Athlete(d) => d.success,
            Dashboard::Coach(d) => d.success,
            Dashboard::Manager(d) => d.success,
            Dashboard::Club => true,
        }
    }
}

// ─── Shared Pieces ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubInfo {
    #[serde(default, deserialize_with = "opt_text")]
    pub club_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub founded_year: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub bio: Option<String>,
}

impl ClubInfo {
    /// A club counts as assigned only when it has a non-zero id.
    pub fn is_assigned(&self) -> bool {
        self.club_id
            .as_deref()
            .is_some_and(|id| !id.is_empty() && id != "0")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub created_at: Option<String>,
}

/// An athlete row in a ranking table (coach and manager views).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankedAthlete {
    #[serde(default, deserialize_with = "opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub games_played: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub total_points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_rebounds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_assists: Option<f64>,
}

// ─── Athlete ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteDashboard {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub athlete: Option<AthleteProfile>,
    #[serde(default)]
    pub statistics: Option<AthleteStats>,
    #[serde(default)]
    pub club: Option<ClubInfo>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub news: Vec<NewsItem>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub recent_games: Vec<GameLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteProfile {
    #[serde(default, deserialize_with = "opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub jersey_number: Option<String>,
    /// Metres, as the backend formats it
    #[serde(default, deserialize_with = "opt_text")]
    pub height: Option<String>,
    /// Kilograms, as the backend formats it
    #[serde(default, deserialize_with = "opt_text")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub birthdate: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteStats {
    #[serde(default, deserialize_with = "opt_f64")]
    pub games_played: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_rebounds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub avg_assists: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub total_points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub total_rebounds: Option<f64>,
}

/// One of the athlete's recent games with their personal line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameLine {
    #[serde(default, deserialize_with = "opt_text")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub home_score: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub away_score: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub rebounds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub assists: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub game_date: Option<String>,
}

// ─── Coach ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachDashboard {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub coach: Option<CoachProfile>,
    #[serde(default)]
    pub club: Option<ClubInfo>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub athletes: Vec<RankedAthlete>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachProfile {
    #[serde(default, deserialize_with = "opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub certification_level: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub years_experience: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub bio: Option<String>,
}

// ─── Manager ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManagerDashboard {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub manager: Option<ManagerProfile>,
    #[serde(default)]
    pub club: Option<ClubInfo>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub coaches: Vec<StaffCoach>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub players: Vec<RankedAthlete>,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManagerProfile {
    #[serde(default, deserialize_with = "opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub experience_years: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub bio: Option<String>,
}

/// A coach row in the manager's staff table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffCoach {
    #[serde(default, deserialize_with = "opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub years_experience: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub athletes_managed: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub certification_level: Option<String>,
}
