//! In-memory user store and request helpers shared by router tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

use userhub_core::error::{Result, UserHubError};
use userhub_core::model::User;
use userhub_users::{app_state::AppState, router, store::UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<BTreeMap<i64, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<i64> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        rows.insert(id, user.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i64, user: &User) -> Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = user.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
    }
}

/// Store whose every call fails the way a dropped database connection does.
pub struct FailingUserStore;

fn db_down<T>() -> Result<T> {
    Err(UserHubError::Database("connection refused: secret-host:5432".into()))
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn insert(&self, _user: &User) -> Result<i64> {
        db_down()
    }

    async fn get(&self, _id: i64) -> Result<Option<User>> {
        db_down()
    }

    async fn update(&self, _id: i64, _user: &User) -> Result<u64> {
        db_down()
    }

    async fn delete(&self, _id: i64) -> Result<u64> {
        db_down()
    }
}

pub fn app() -> Router {
    app_with(Arc::new(MemoryUserStore::default()))
}

pub fn app_with(store: Arc<dyn UserStore>) -> Router {
    router::build_router(AppState::new(store))
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router request failed")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), 1024 * 1024).await.unwrap().to_vec()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}
