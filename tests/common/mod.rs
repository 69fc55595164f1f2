// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use courtside::cms::CmsApp;
use courtside::routes::create_router;
use courtside::services::ApiClient;
use courtside::storage::LocalStore;
use courtside::AppState;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Hit {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct Backend {
    replies: HashMap<(Method, String), (StatusCode, Value)>,
    hits: Mutex<Vec<Hit>>,
}

/// Stand-in for the club REST API, listening on an ephemeral local port.
///
/// Paths are relative to `/api/v1`. Unconfigured paths answer 404 with an
/// `error` body.
pub struct FakeBackend {
    pub base_url: String,
    backend: Arc<Backend>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub async fn start(replies: Vec<(Method, &str, StatusCode, Value)>) -> Self {
        let backend = Arc::new(Backend {
            replies: replies
                .into_iter()
                .map(|(m, p, s, v)| ((m, format!("/api/v1{}", p)), (s, v)))
                .collect(),
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(reply).with_state(backend.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("fake backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            backend,
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.backend.hits.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits()
            .into_iter()
            .map(|h| h.path.trim_start_matches("/api/v1").to_string())
            .collect()
    }
}

async fn reply(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    backend.hits.lock().unwrap().push(Hit {
        method: method.clone(),
        path: path.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match backend.replies.get(&(method, path)) {
        Some((status, value)) => (*status, Json(value.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Not found"})),
        ),
    }
}

/// Base URL of a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v1", port)
}

/// Successful login body for the given role.
#[allow(dead_code)]
pub fn login_reply(id: u64, role: &str) -> Value {
    serde_json::json!({
        "token": "abc",
        "user": {"id": id, "role": role, "first_name": "A", "last_name": "B"}
    })
}

/// A CMS app over an in-memory store.
#[allow(dead_code)]
pub fn test_cms(api_url: &str) -> (CmsApp, LocalStore) {
    let store = LocalStore::new_memory();
    (CmsApp::boot(ApiClient::new(api_url), store.clone()), store)
}

/// Create a test app talking to `api_url`, with in-memory storage.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(api_url: &str) -> (axum::Router, Arc<AppState>) {
    let (app, _) = test_cms(api_url);
    let state = Arc::new(AppState::new(app));
    (create_router(state.clone()), state)
}
