//! CRUD handlers. Each one decodes, runs one store call, responds, and
//! reports the outcome to the per-verb metrics.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use userhub_core::error::UserHubError;
use userhub_core::model::User;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::obs::Verb;

type IdParam = Result<Path<i64>, PathRejection>;
type UserBody = Result<Json<User>, JsonRejection>;

pub async fn add_user(State(app): State<AppState>, body: UserBody) -> ApiResult<Json<User>> {
    let started = Instant::now();
    let res = create(&app, body).await;
    track(&app, Verb::Add, started, res)
}

pub async fn get_user(State(app): State<AppState>, id: IdParam) -> ApiResult<Json<User>> {
    let started = Instant::now();
    let res = fetch(&app, id).await;
    track(&app, Verb::Get, started, res)
}

pub async fn update_user(
    State(app): State<AppState>,
    id: IdParam,
    body: UserBody,
) -> ApiResult<Json<User>> {
    let started = Instant::now();
    let res = update(&app, id, body).await;
    track(&app, Verb::Put, started, res)
}

pub async fn delete_user(State(app): State<AppState>, id: IdParam) -> ApiResult<StatusCode> {
    let started = Instant::now();
    let res = delete(&app, id).await;
    track(&app, Verb::Delete, started, res)
}

async fn create(app: &AppState, body: UserBody) -> ApiResult<Json<User>> {
    let Json(user) = body?;
    let id = app.users().insert(&user).await?;
    tracing::info!(id, "user created");
    Ok(Json(user.with_id(id)))
}

async fn fetch(app: &AppState, id: IdParam) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let user = app.users().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(user))
}

async fn update(app: &AppState, id: IdParam, body: UserBody) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let Json(user) = body?;
    if app.users().update(id, &user).await? == 0 {
        return Err(not_found(id).into());
    }
    tracing::info!(id, "user updated");
    Ok(Json(user.with_id(id)))
}

async fn delete(app: &AppState, id: IdParam) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    if app.users().delete(id).await? == 0 {
        return Err(not_found(id).into());
    }
    tracing::info!(id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn not_found(id: i64) -> UserHubError {
    UserHubError::NotFound(format!("user {id} not found"))
}

fn track<T>(app: &AppState, verb: Verb, started: Instant, res: ApiResult<T>) -> ApiResult<T> {
    let metrics = app.metrics();
    match &res {
        Ok(_) => metrics.record_success(verb, started.elapsed()),
        Err(e) => {
            metrics.record_error(verb);
            tracing::debug!(verb = verb.as_str(), error = %e.0, "request failed");
        }
    }
    res
}
