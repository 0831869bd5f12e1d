//! In-memory account store and request helpers shared by router tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

use userhub_auth::{app_state::AppState, router, store::AccountStore};
use userhub_core::error::{Result, UserHubError};
use userhub_core::model::Account;

#[derive(Default)]
pub struct MemoryAccountStore {
    rows: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: &Account) -> Result<String> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.login == account.login) {
            return Err(UserHubError::Conflict("record already exists".into()));
        }
        rows.push(account.clone());
        Ok(account.id.clone())
    }

    async fn find_by_credentials(&self, login: &str, password: &str) -> Result<Option<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.login == login && r.password == password)
            .cloned())
    }
}

/// Store whose every call fails the way a dropped database connection does.
pub struct FailingAccountStore;

#[async_trait]
impl AccountStore for FailingAccountStore {
    async fn insert(&self, _account: &Account) -> Result<String> {
        Err(UserHubError::Database("connection refused: secret-host:5432".into()))
    }

    async fn find_by_credentials(&self, _login: &str, _password: &str) -> Result<Option<Account>> {
        Err(UserHubError::Database("connection refused: secret-host:5432".into()))
    }
}

pub fn app() -> Router {
    app_with(Arc::new(MemoryAccountStore::default()))
}

pub fn app_with(store: Arc<dyn AccountStore>) -> Router {
    router::build_router(AppState::new(store))
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router request failed")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        b = b.header("cookie", c);
    }
    b.body(Body::empty()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header<'a>(resp: &'a Response<Body>, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .map(|v| v.to_str().unwrap())
        .unwrap_or_else(|| panic!("missing header {name}"))
}

/// `session_id=<value>` pair from a `Set-Cookie` header.
pub fn session_pair(resp: &Response<Body>) -> String {
    header(resp, "set-cookie")
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
