// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Router-level tests for the local web front.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{create_test_app, login_reply, unreachable_api_url, FakeBackend};
use courtside::cms::Page;
use courtside::middleware::security::CONTENT_SECURITY_POLICY;
use serde_json::json;
use tower::ServiceExt; // for oneshot

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = create_test_app(&unreachable_api_url());
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_home_modal_query() {
    let (app, state) = create_test_app(&unreachable_api_url());

    let html = body_text(app.clone().oneshot(get("/?modal=login")).await.unwrap()).await;
    assert!(html.contains("<div id=\"loginModal\" class=\"modal\">"));

    let html = body_text(app.oneshot(get("/?modal=none")).await.unwrap()).await;
    assert!(html.contains("<div id=\"loginModal\" class=\"modal hidden\">"));
    assert_eq!(state.app.lock().await.page(), Page::Home);
}

#[tokio::test]
async fn test_dashboard_without_session_prompts_login() {
    let backend = FakeBackend::start(vec![]).await;
    let (app, _) = create_test_app(&backend.base_url);

    let response = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("<div class=\"alert\" role=\"alert\">Please login first</div>"));
    assert!(html.contains("<div id=\"loginModal\" class=\"modal\">"));
    assert!(html.contains("<section id=\"homePage\" class=\"page\">"));
    assert!(backend.hits().is_empty());
}

#[tokio::test]
async fn test_login_form_renders_dashboard() {
    let backend = FakeBackend::start(vec![
        (Method::POST, "/auth/login", StatusCode::OK, login_reply(1, "athlete")),
        (
            Method::GET,
            "/athletes/dashboard/1",
            StatusCode::OK,
            json!({"success": true, "recent_games": []}),
        ),
    ])
    .await;
    let (app, _) = create_test_app(&backend.base_url);

    let response = app
        .oneshot(form_post("/auth/login", "email=a%40b.co&password=secret"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("<span id=\"userName\">A (athlete)</span>"));
    assert!(html.contains("<section id=\"dashboardPage\" class=\"page\">"));
    assert!(html.contains("No recent games"));
    assert!(backend.hits()[0].body.contains("\"email\":\"a@b.co\""));
}

#[tokio::test]
async fn test_failed_login_form_keeps_modal_open() {
    let backend = FakeBackend::start(vec![(
        Method::POST,
        "/auth/login",
        StatusCode::UNAUTHORIZED,
        json!({"error": "Invalid email or password"}),
    )])
    .await;
    let (app, state) = create_test_app(&backend.base_url);

    let html = body_text(
        app.oneshot(form_post("/auth/login", "email=a%40b.co&password=nope"))
            .await
            .unwrap(),
    )
    .await;

    assert!(html.contains("Login failed: Invalid email or password"));
    assert!(html.contains("<div id=\"loginModal\" class=\"modal\">"));
    assert!(!state.app.lock().await.is_authenticated());
}

#[tokio::test]
async fn test_logout_redirects_home() {
    let backend = FakeBackend::start(vec![
        (Method::POST, "/auth/login", StatusCode::OK, login_reply(1, "club")),
    ])
    .await;
    let (app, state) = create_test_app(&backend.base_url);

    app.clone()
        .oneshot(form_post("/auth/login", "email=a%40b.co&password=secret"))
        .await
        .unwrap();
    assert!(state.app.lock().await.is_authenticated());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert!(!state.app.lock().await.is_authenticated());
}

#[tokio::test]
async fn test_served_page_hides_closed_modal() {
    let (app, _) = create_test_app(&unreachable_api_url());
    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;

    let head = &html[..html.find("</head>").unwrap()];
    assert!(head.contains("<style>.hidden{display:none!important}</style>"));
    assert!(html.contains("<div id=\"loginModal\" class=\"modal hidden\">"));
    assert!(html.contains("<section id=\"dashboardPage\" class=\"page hidden\">"));
}

#[tokio::test]
async fn test_coach_photo_allowed_by_csp() {
    let backend = FakeBackend::start(vec![
        (Method::POST, "/auth/login", StatusCode::OK, login_reply(2, "coach")),
        (
            Method::GET,
            "/coaches/dashboard/2",
            StatusCode::OK,
            json!({
                "success": true,
                "coach": {"first_name": "Cy", "photo_url": "https://cdn.example/c.jpg"}
            }),
        ),
    ])
    .await;
    let (app, _) = create_test_app(&backend.base_url);

    let response = app
        .oneshot(form_post("/auth/login", "email=c%40b.co&password=secret"))
        .await
        .unwrap();
    let csp = response
        .headers()
        .get("Content-Security-Policy")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(csp, CONTENT_SECURITY_POLICY);

    let img_src = csp
        .split(';')
        .map(str::trim)
        .find(|d| d.starts_with("img-src"))
        .unwrap();
    assert!(img_src.split_whitespace().any(|s| s == "https:"));

    let html = body_text(response).await;
    assert!(html.contains("<img src=\"https://cdn.example/c.jpg\""));
}
