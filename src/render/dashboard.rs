// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role dashboard formatter.
//!
//! One entry point, [`render`], maps a tagged [`Dashboard`] to markup. The
//! per-role layouts share tile builders but keep their own labels, default
//! initials and news excerpt lengths.
//!
//! Rows in ranking tables are emitted in the order the backend returned
//! them; the first three get `rank-top`.

use crate::models::dashboard::{
    AthleteDashboard, AthleteProfile, AthleteStats, CoachDashboard, CoachProfile, GameLine,
    ManagerDashboard, ManagerProfile, RankedAthlete, StaffCoach,
};
use crate::models::{ClubInfo, Dashboard, NewsItem, Role};
use crate::render::html::{
    self, count, escape, excerpt, fixed, initials, non_empty, short_date, text, text_or,
};
use chrono::{Datelike, NaiveDate};

const ATHLETE_NEWS_EXCERPT: usize = 150;
const COACH_NEWS_EXCERPT: usize = 150;
const MANAGER_NEWS_EXCERPT: usize = 120;

/// Rows at the top of a ranking table that get highlighted.
const TOP_RANKS: usize = 3;
/// Manager view lists at most this many players.
const MANAGER_PLAYER_ROWS: usize = 10;

/// Shown for club accounts, which have no dashboard endpoint.
pub const CLUB_PLACEHOLDER: &str = "<p>Loading club dashboard...</p>";

/// Render a dashboard. `today` anchors age calculations.
pub fn render(dashboard: &Dashboard, today: NaiveDate) -> String {
    match dashboard {
        Dashboard::Athlete(d) => render_athlete(d, today),
        Dashboard::Coach(d) => render_coach(d),
        Dashboard::Manager(d) => render_manager(d),
        Dashboard::Club => CLUB_PLACEHOLDER.to_string(),
    }
}

/// Markup for a payload whose `success` flag was not set.
pub fn load_failed(role: &Role) -> String {
    match role {
        Role::Athlete => "<p>Error loading dashboard</p>".to_string(),
        other => format!("<p>Error loading {} dashboard</p>", escape(other.as_str())),
    }
}

/// Markup for a dashboard request that never got an answer.
pub fn request_failed(role: &Role) -> String {
    match role {
        Role::Athlete => "<p>Error loading dashboard. Please try again.</p>".to_string(),
        other => format!(
            "<p>Error loading {} dashboard. Please try again.</p>",
            escape(other.as_str())
        ),
    }
}

/// Markup for a role the client has no layout for.
pub fn unsupported_role(role: &Role) -> String {
    format!(
        "<p class=\"no-data\">No dashboard is available for the {} role.</p>",
        escape(role.as_str())
    )
}

// ─── Athlete ─────────────────────────────────────────────────

fn render_athlete(d: &AthleteDashboard, today: NaiveDate) -> String {
    let default_profile = AthleteProfile::default();
    let default_stats = AthleteStats::default();
    let athlete = d.athlete.as_ref().unwrap_or(&default_profile);
    let stats = d.statistics.as_ref().unwrap_or(&default_stats);

    let name = full_name(athlete.first_name.as_deref(), athlete.last_name.as_deref());
    let age = non_empty(athlete.birthdate.as_deref())
        .and_then(html::parse_date)
        .map(|born| format!("{} years", today.year() - born.year()))
        .unwrap_or_else(|| html::NOT_AVAILABLE.to_string());

    let mut details = String::new();
    details.push_str(&detail("Name", &name));
    details.push_str(&detail("Position", &text(athlete.position.as_deref())));
    details.push_str(&detail(
        "Jersey",
        &format!("#{}", text(athlete.jersey_number.as_deref())),
    ));
    details.push_str(&detail("Height", &with_unit(athlete.height.as_deref(), "m")));
    details.push_str(&detail("Weight", &with_unit(athlete.weight.as_deref(), "kg")));
    details.push_str(&detail("Age", &age));
    details.push_str(&detail("Email", &text(athlete.email.as_deref())));

    let profile_tile = tile(
        "player-info-tile",
        "🏀 Player Profile",
        &format!(
            "<div class=\"player-photo\"><div class=\"avatar-placeholder\">{}</div></div>\
             <div class=\"player-details\">{}</div>{}",
            initials(
                athlete.first_name.as_deref(),
                athlete.last_name.as_deref(),
                ('A', 'T')
            ),
            details,
            bio_block("player-bio", athlete.bio.as_deref()),
        ),
    );

    let stat_items = [
        ("Games Played", count(stats.games_played), false),
        ("Avg Points", fixed(stats.avg_points, 1), false),
        ("Avg Rebounds", fixed(stats.avg_rebounds, 1), false),
        ("Avg Assists", fixed(stats.avg_assists, 1), false),
        ("Total Points", count(stats.total_points), true),
        ("Total Rebounds", count(stats.total_rebounds), true),
    ]
    .iter()
    .map(|(label, value, highlight)| {
        format!(
            "<div class=\"stat-item\"><div class=\"stat-label\">{}</div>\
             <div class=\"stat-value{}\">{}</div></div>",
            label,
            if *highlight { " highlight" } else { "" },
            value
        )
    })
    .collect::<String>();

    let games = if d.recent_games.is_empty() {
        no_data("No recent games")
    } else {
        d.recent_games.iter().map(game_item).collect()
    };

    let stats_tile = tile(
        "stats-tile",
        "📊 Performance Statistics",
        &format!(
            "<div class=\"stats-grid\">{}</div>\
             <h4 style=\"margin-top: 20px;\">Recent Games</h4>\
             <div class=\"recent-games-list\">{}</div>",
            stat_items, games
        ),
    );

    format!(
        "<h2>{}'s Dashboard</h2><div class=\"athlete-dashboard-grid\">{}{}{}{}</div>",
        name,
        profile_tile,
        stats_tile,
        club_tile(d.club.as_ref(), ClubLayout::Athlete),
        news_tile(&d.news, "📰 Latest Basketball News", ATHLETE_NEWS_EXCERPT),
    )
}

fn game_item(game: &GameLine) -> String {
    format!(
        "<div class=\"game-item\">\
         <div class=\"game-teams\">{} vs {}</div>\
         <div class=\"game-score\">{} - {}</div>\
         <div class=\"game-stats\">{} pts | {} reb | {} ast</div>\
         <div class=\"game-date\">{}</div></div>",
        text(game.home_team.as_deref()),
        text(game.away_team.as_deref()),
        text_or(game.home_score.as_deref(), "0"),
        text_or(game.away_score.as_deref(), "0"),
        count(game.points),
        count(game.rebounds),
        count(game.assists),
        short_date(game.game_date.as_deref()),
    )
}

// ─── Coach ───────────────────────────────────────────────────

fn render_coach(d: &CoachDashboard) -> String {
    let default_profile = CoachProfile::default();
    let coach = d.coach.as_ref().unwrap_or(&default_profile);
    let name = full_name(coach.first_name.as_deref(), coach.last_name.as_deref());

    let mut details = String::new();
    details.push_str(&detail("Name", &name));
    details.push_str(&detail("Specialization", &text(coach.specialization.as_deref())));
    details.push_str(&detail(
        "Certification",
        &text(coach.certification_level.as_deref()),
    ));
    details.push_str(&detail(
        "Experience",
        &format!("{} years", count(coach.years_experience)),
    ));
    details.push_str(&detail("Email", &text(coach.email.as_deref())));

    let profile_tile = tile(
        "coach-info-tile",
        "🏀 Coach Profile",
        &format!(
            "<div class=\"coach-photo\">{}</div><div class=\"coach-details\">{}</div>{}",
            photo(
                coach.photo_url.as_deref(),
                "Coach photo",
                "coach-photo-img",
                &initials(
                    coach.first_name.as_deref(),
                    coach.last_name.as_deref(),
                    ('C', 'H')
                ),
            ),
            details,
            bio_block("coach-bio", coach.bio.as_deref()),
        ),
    );

    let athletes = if d.athletes.is_empty() {
        no_data("No athletes assigned")
    } else {
        ranking_table(
            &[
                "Rank", "Player", "Position", "Games", "Avg Pts", "Total Pts", "Avg Reb",
                "Avg Ast",
            ],
            d.athletes.iter().enumerate().map(|(i, a)| {
                format!(
                    "{}<td>{}</td><td>{}</td>",
                    athlete_cells(i, a),
                    fixed(a.avg_rebounds, 1),
                    fixed(a.avg_assists, 1)
                )
            }),
        )
    };

    format!(
        "<h2>{}'s Coaching Dashboard</h2><div class=\"coach-dashboard-grid\">{}{}{}{}</div>",
        name,
        profile_tile,
        tile(
            "athletes-ranking-tile",
            "📊 Managed Athletes Performance",
            &athletes
        ),
        club_tile(d.club.as_ref(), ClubLayout::Coach),
        news_tile(&d.news, "📰 Latest News", COACH_NEWS_EXCERPT),
    )
}

// ─── Manager ─────────────────────────────────────────────────

fn render_manager(d: &ManagerDashboard) -> String {
    let default_profile = ManagerProfile::default();
    let manager = d.manager.as_ref().unwrap_or(&default_profile);
    let name = full_name(manager.first_name.as_deref(), manager.last_name.as_deref());

    let mut details = String::new();
    details.push_str(&detail("Name", &name));
    details.push_str(&detail(
        "Role",
        &text_or(manager.specialization.as_deref(), "General Manager"),
    ));
    details.push_str(&detail(
        "Experience",
        &format!("{} years", count(manager.experience_years)),
    ));
    details.push_str(&detail("Email", &text(manager.email.as_deref())));

    let profile_tile = tile(
        "manager-info-tile",
        "👔 Manager Profile",
        &format!(
            "<div class=\"manager-photo\">{}</div><div class=\"manager-details\">{}</div>{}",
            photo(
                manager.photo_url.as_deref(),
                "Manager photo",
                "manager-photo-img",
                &initials(
                    manager.first_name.as_deref(),
                    manager.last_name.as_deref(),
                    ('M', 'G')
                ),
            ),
            details,
            bio_block("manager-bio", manager.bio.as_deref()),
        ),
    );

    let coaches = if d.coaches.is_empty() {
        no_data("No coaches assigned")
    } else {
        ranking_table(
            &[
                "Coach Name",
                "Specialization",
                "Experience",
                "Athletes",
                "Cert Level",
            ],
            d.coaches.iter().map(staff_cells),
        )
    };

    let players = if d.players.is_empty() {
        no_data("No players in club")
    } else {
        ranking_table(
            &["Rank", "Player", "Position", "Games", "Avg Pts", "Total Pts"],
            d.players
                .iter()
                .take(MANAGER_PLAYER_ROWS)
                .enumerate()
                .map(|(i, p)| athlete_cells(i, p)),
        )
    };

    format!(
        "<h2>{}'s Management Dashboard</h2><div class=\"manager-dashboard-grid\">{}{}{}{}</div>",
        name,
        profile_tile,
        tile("coaches-table-tile", "🏀 Coaching Staff Performance", &coaches),
        tile(
            "players-ranking-tile",
            "⭐ Top Players by Performance",
            &players
        ),
        news_tile(&d.news, "📰 News & Updates", MANAGER_NEWS_EXCERPT),
    )
}

fn staff_cells(coach: &StaffCoach) -> String {
    format!(
        "<td><strong>{}</strong></td><td>{}</td><td>{} yrs</td>\
         <td class=\"stat-highlight\">{}</td><td>{}</td>",
        full_name(coach.first_name.as_deref(), coach.last_name.as_deref()),
        text(coach.specialization.as_deref()),
        count(coach.years_experience),
        count(coach.athletes_managed),
        text(coach.certification_level.as_deref()),
    )
}

// ─── Shared Tiles ────────────────────────────────────────────

#[derive(Clone, Copy)]
enum ClubLayout {
    Athlete,
    Coach,
}

fn club_tile(club: Option<&ClubInfo>, layout: ClubLayout) -> String {
    let (class, heading, placeholder) = match layout {
        ClubLayout::Athlete => ("club-tile", "🏆 Club Information", "Not assigned to any club yet"),
        ClubLayout::Coach => ("club-info-tile", "🏢 Club Information", "Not assigned to a club"),
    };

    let body = match club.filter(|c| c.is_assigned()) {
        None => no_data(placeholder),
        Some(club) => {
            let mut out = String::from("<div class=\"club-details\">");
            match layout {
                ClubLayout::Athlete => {
                    out.push_str(&format!("<h4>{}</h4>", text(club.name.as_deref())));
                }
                ClubLayout::Coach => {
                    out.push_str(&detail("Club Name", &text(club.name.as_deref())));
                }
            }
            out.push_str(&detail("Location", &text(club.location.as_deref())));
            out.push_str(&detail("Founded", &text(club.founded_year.as_deref())));
            match (layout, non_empty(club.website.as_deref())) {
                (_, Some(site)) => out.push_str(&detail(
                    "Website",
                    &format!(
                        "<a href=\"{0}\" target=\"_blank\">{0}</a>",
                        escape(site)
                    ),
                )),
                (ClubLayout::Coach, None) => out.push_str(&detail("Website", html::NOT_AVAILABLE)),
                (ClubLayout::Athlete, None) => {}
            }
            match (layout, non_empty(club.contact_email.as_deref())) {
                (ClubLayout::Athlete, Some(email)) => {
                    out.push_str(&detail("Contact", &escape(email)))
                }
                (ClubLayout::Coach, email) => out.push_str(&detail("Email", &text(email))),
                (ClubLayout::Athlete, None) => {}
            }
            out.push_str(&bio_block("club-bio", club.bio.as_deref()));
            out.push_str("</div>");
            out
        }
    };

    tile(class, heading, &body)
}

fn news_tile(news: &[NewsItem], heading: &str, cutoff: usize) -> String {
    let body = if news.is_empty() {
        no_data("No news available")
    } else {
        let items: String = news
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"news-item\"><h4>{}</h4><p>{}</p>\
                     <div class=\"news-meta\"><span class=\"news-category\">{}</span>\
                     <span class=\"news-date\">{}</span></div></div>",
                    text(item.title.as_deref()),
                    escape(&excerpt(item.content.as_deref().unwrap_or(""), cutoff)),
                    text(item.category.as_deref()),
                    short_date(item.created_at.as_deref()),
                )
            })
            .collect();
        format!("<div class=\"news-list\">{}</div>", items)
    };

    tile("news-tile", heading, &body)
}

/// Rank, name, position, games, average and total points.
fn athlete_cells(index: usize, athlete: &RankedAthlete) -> String {
    format!(
        "<td class=\"rank-{}\">{}</td><td><strong>{}</strong></td><td>{}</td><td>{}</td>\
         <td>{}</td><td class=\"stat-highlight\">{}</td>",
        if index < TOP_RANKS { "top" } else { "normal" },
        index + 1,
        full_name(athlete.first_name.as_deref(), athlete.last_name.as_deref()),
        text(athlete.position.as_deref()),
        count(athlete.games_played),
        fixed(athlete.avg_points, 1),
        fixed(athlete.total_points, 0),
    )
}

fn ranking_table<I>(headers: &[&str], rows: I) -> String
where
    I: Iterator<Item = String>,
{
    let head: String = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();
    let body: String = rows.map(|cells| format!("<tr>{}</tr>", cells)).collect();
    format!(
        "<table class=\"ranking-table\"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        head, body
    )
}

fn tile(class: &str, heading: &str, body: &str) -> String {
    format!(
        "<div class=\"dashboard-tile {}\"><h3>{}</h3>{}</div>",
        class, heading, body
    )
}

/// `value` is already escaped.
fn detail(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, value)
}

fn no_data(message: &str) -> String {
    format!("<p class=\"no-data\">{}</p>", message)
}

fn bio_block(class: &str, bio: Option<&str>) -> String {
    match non_empty(bio) {
        Some(bio) => format!("<div class=\"{}\"><p>{}</p></div>", class, escape(bio)),
        None => String::new(),
    }
}

fn photo(url: Option<&str>, alt: &str, class: &str, initials: &str) -> String {
    match non_empty(url) {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"{}\">",
            escape(url),
            alt,
            class
        ),
        None => format!("<div class=\"avatar-placeholder\">{}</div>", initials),
    }
}

fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    match (non_empty(first), non_empty(last)) {
        (None, None) => html::NOT_AVAILABLE.to_string(),
        (f, l) => escape(&format!("{} {}", f.unwrap_or(""), l.unwrap_or("")).trim().to_string()),
    }
}

fn with_unit(value: Option<&str>, unit: &str) -> String {
    match non_empty(value) {
        Some(v) => format!("{}{}", escape(v), unit),
        None => html::NOT_AVAILABLE.to_string(),
    }
}
