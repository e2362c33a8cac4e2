#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use watchlist_api::config::ServerConfig;
use watchlist_api::router::build_app_router;
use watchlist_api::state::AppState;
use watchlist_core::types::DbId;
use watchlist_db::models::record::{CreateRecord, Record, UpdateRecord};
use watchlist_db::store::StoreResult;
use watchlist_db::{StoreError, WatchListStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn WatchListStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory [`WatchListStore`] that counts calls and can be switched into a
/// failing mode to simulate a lost connection.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Record>>,
    next_id: Mutex<DbId>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of store methods invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with a storage error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<Record> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(sqlx::Error::Protocol(
                "connection to 10.0.0.5 refused".into(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl WatchListStore for MemoryStore {
    async fn create(&self, input: &CreateRecord) -> StoreResult<Record> {
        self.enter()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let record = input.clone().into_record(id);
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> StoreResult<Vec<Record>> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn list_by_title(&self, title: &str) -> StoreResult<Vec<Record>> {
        self.enter()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|r| r.title == title)
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>> {
        self.enter()?;
        Ok(self.rows().into_iter().find(|r| r.id == id))
    }

    async fn update(&self, id: DbId, input: &UpdateRecord) -> StoreResult<Record> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *row = input.clone().into_record(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.enter()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a raw body without any `Content-Type` header.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw body with a JSON content type.
pub async fn send_raw_json(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::POST, uri, &body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::PUT, uri, &body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw_json(app, Method::PATCH, uri, &body.to_string()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
