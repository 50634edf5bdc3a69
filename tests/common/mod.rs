#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use kb_console::{services::api_client::ApiClient, state::{AppState, SharedState}};

/// What the fake backend saw: method + path (with raw query) and JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub route: String,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Vec<Seen>>>,
}

impl Recorder {
    pub async fn push(&self, route: impl Into<String>, body: Value) {
        self.inner.lock().await.push(Seen { route: route.into(), body });
    }

    pub async fn all(&self) -> Vec<Seen> {
        self.inner.lock().await.clone()
    }

    pub async fn last(&self) -> Seen {
        self.inner.lock().await.last().cloned().expect("no request recorded")
    }
}

/// Backend that answers every endpoint the console uses.
pub fn happy_backend(rec: Recorder) -> Router {
    Router::new()
        .route(
            "/chat",
            post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("POST /chat", body).await;
                Json(json!({"answer": "hi", "history_id": 42}))
            }),
        )
        .route(
            "/rate",
            post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("POST /rate", body).await;
                Json(json!({"ok": true}))
            }),
        )
        .route(
            "/kb/search",
            get(|State(rec): State<Recorder>, RawQuery(raw): RawQuery| async move {
                rec.push(format!("GET /kb/search?{}", raw.unwrap_or_default()), Value::Null)
                    .await;
                Json(json!([
                    {"id": 1, "title": "Doc A", "content": "...", "category": "faq",
                     "created_by": "seed", "is_active": true},
                    {"id": 7, "title": "Doc B"}
                ]))
            }),
        )
        .route(
            "/kb/{id}",
            get(|Path(id): Path<i64>| async move {
                if id == 1 {
                    Json(json!({"id": 1, "title": "Doc A", "content": "body"})).into_response()
                } else {
                    (StatusCode::NOT_FOUND, r#"{"detail":"Not found"}"#).into_response()
                }
            }),
        )
        .route(
            "/es/search",
            post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("POST /es/search", body.clone()).await;
                Json(json!({"total_results": 2, "query": body["query"], "categories_found": ["faq"]}))
            }),
        )
        .route(
            "/es/categories",
            get(|| async { Json(json!({"categories": ["faq", "policy"], "count": 2})) }),
        )
        .with_state(rec)
}

/// Backend that fails every call with the given status and body.
pub fn failing_backend(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn state_for(app: Router) -> SharedState {
    state_for_base(spawn(app).await)
}

pub fn state_for_base(base_url: String) -> SharedState {
    AppState::shared(ApiClient::new(base_url))
}

/// A base URL nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
