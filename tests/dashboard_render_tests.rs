// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role dashboard formatting: defaults, truncation and ranking order.

use chrono::NaiveDate;
use courtside::models::{Dashboard, Role};
use courtside::render;
use serde_json::{json, Value};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn render_as(role: Role, payload: Value) -> String {
    let dashboard = Dashboard::from_value(&role, payload)
        .expect("payload should parse")
        .expect("role has a layout");
    render::render(&dashboard, today())
}

fn news(content: &str) -> Value {
    json!([{"title": "Update", "content": content, "category": "club"}])
}

#[test]
fn test_empty_payloads_render_defaults_for_every_role() {
    for role in [Role::Athlete, Role::Coach, Role::Manager] {
        let html = render_as(role.clone(), json!({"success": true}));
        assert!(html.contains("N/A"), "{} should show N/A", role);
        assert!(html.contains("No news available"), "{}", role);
    }

    let coach = render_as(Role::Coach, json!({"success": true}));
    assert!(coach.contains("No athletes assigned"));
    assert!(coach.contains("Not assigned to a club"));
    assert!(coach.contains("<strong>Experience:</strong> 0 years"));

    let manager = render_as(Role::Manager, json!({"success": true}));
    assert!(manager.contains("No coaches assigned"));
    assert!(manager.contains("No players in club"));
    assert!(manager.contains("<strong>Role:</strong> General Manager"));
}

#[test]
fn test_nulls_and_numeric_strings() {
    let html = render_as(
        Role::Athlete,
        json!({
            "success": true,
            "athlete": {"first_name": null, "jersey_number": 23, "height": "1.98"},
            "statistics": {"games_played": "12", "avg_points": null, "total_points": 240},
            "news": null,
            "recent_games": null
        }),
    );
    assert!(html.contains("<strong>Jersey:</strong> #23"));
    assert!(html.contains("<strong>Height:</strong> 1.98m"));
    assert!(html.contains("<div class=\"stat-value\">12</div>"));
    assert!(html.contains("<div class=\"stat-value highlight\">240</div>"));
    assert!(html.contains("No recent games"));
}

#[test]
fn test_empty_recent_games_placeholder() {
    let html = render_as(
        Role::Athlete,
        json!({"success": true, "recent_games": []}),
    );
    assert!(html.contains("<p class=\"no-data\">No recent games</p>"));
    assert!(!html.contains("game-item"));
}

#[test]
fn test_recent_game_line() {
    let html = render_as(
        Role::Athlete,
        json!({
            "success": true,
            "recent_games": [{
                "home_team": "Dunes", "away_team": "Tides",
                "home_score": 88, "away_score": 80,
                "points": 21, "rebounds": 5, "assists": 7,
                "game_date": "2026-02-07"
            }]
        }),
    );
    assert!(html.contains("<div class=\"game-teams\">Dunes vs Tides</div>"));
    assert!(html.contains("<div class=\"game-score\">88 - 80</div>"));
    assert!(html.contains("21 pts | 5 reb | 7 ast"));
    assert!(html.contains("<div class=\"game-date\">2/7/2026</div>"));
}

#[test]
fn test_excerpt_at_and_over_cutoff() {
    let exact = "a".repeat(150);
    let html = render_as(Role::Athlete, json!({"success": true, "news": news(&exact)}));
    assert!(html.contains(&format!("<p>{}</p>", exact)));
    assert!(!html.contains(&format!("{}...", exact)));

    let over = format!("{}b", "a".repeat(150));
    let html = render_as(Role::Coach, json!({"success": true, "news": news(&over)}));
    assert!(html.contains(&format!("<p>{}...</p>", "a".repeat(150))));
    assert!(!html.contains(&over));

    let manager_exact = "m".repeat(120);
    let html = render_as(
        Role::Manager,
        json!({"success": true, "news": news(&manager_exact)}),
    );
    assert!(html.contains(&format!("<p>{}</p>", manager_exact)));
}

#[test]
fn test_excerpt_counts_characters_not_bytes() {
    let text = "é".repeat(151);
    let html = render_as(Role::Athlete, json!({"success": true, "news": news(&text)}));
    assert!(html.contains(&format!("<p>{}...</p>", "é".repeat(150))));
}

#[test]
fn test_ranking_keeps_backend_order() {
    let athletes: Vec<Value> = [5.0, 30.0, 12.5, 40.0]
        .iter()
        .enumerate()
        .map(|(i, avg)| json!({"first_name": format!("P{}", i), "avg_points": avg}))
        .collect();
    let html = render_as(Role::Coach, json!({"success": true, "athletes": athletes}));

    let p0 = html.find("P0").unwrap();
    let p1 = html.find("P1").unwrap();
    let p2 = html.find("P2").unwrap();
    let p3 = html.find("P3").unwrap();
    assert!(p0 < p1 && p1 < p2 && p2 < p3);

    assert_eq!(html.matches("class=\"rank-top\"").count(), 3);
    assert_eq!(html.matches("class=\"rank-normal\"").count(), 1);
    assert!(html.contains("<td class=\"rank-top\">1</td><td><strong>P0</strong></td>"));
    assert!(html.contains("<td class=\"rank-normal\">4</td><td><strong>P3</strong></td>"));
}

#[test]
fn test_manager_lists_at_most_ten_players() {
    let players: Vec<Value> = (0..12)
        .map(|i| json!({"first_name": format!("Player{:02}", i)}))
        .collect();
    let html = render_as(Role::Manager, json!({"success": true, "players": players}));

    assert!(html.contains("Player09"));
    assert!(!html.contains("Player10"));
    assert!(!html.contains("Player11"));
}

#[test]
fn test_unassigned_club_id() {
    let html = render_as(
        Role::Athlete,
        json!({"success": true, "club": {"club_id": 0, "name": "Ghost"}}),
    );
    assert!(html.contains("Not assigned to any club yet"));
    assert!(!html.contains("Ghost"));

    let html = render_as(
        Role::Athlete,
        json!({"success": true, "club": {"club_id": 3, "name": "Dunes", "website": "https://dunes.example"}}),
    );
    assert!(html.contains("<h4>Dunes</h4>"));
    assert!(html.contains("<a href=\"https://dunes.example\" target=\"_blank\">"));
}

#[test]
fn test_club_and_unknown_roles() {
    assert!(Dashboard::from_value(&Role::Unknown("referee".into()), json!({}))
        .unwrap()
        .is_none());
    assert_eq!(
        render::render(&Dashboard::Club, today()),
        render::dashboard::CLUB_PLACEHOLDER
    );
}
