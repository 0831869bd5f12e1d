//! Route handlers: decode, call the store or the session table, respond.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use uuid::Uuid;

use userhub_core::error::UserHubError;
use userhub_core::model::{Account, Credentials, Registration};

use crate::app_state::AppState;
use crate::cookie;
use crate::error::ApiResult;

const SIGNIN_MESSAGE: &str = "Please go to login and provide Login/Password";

pub async fn register(
    State(app): State<AppState>,
    body: Result<Json<Registration>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(reg) = body?;
    let account = reg.into_account(Uuid::new_v4().to_string());

    let id = app.accounts().insert(&account).await?;
    tracing::info!(%id, login = %account.login, "account registered");

    Ok(StatusCode::OK)
}

pub async fn login(
    State(app): State<AppState>,
    jar: CookieJar,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(CookieJar, Json<Account>)> {
    let Json(creds) = body?;

    let account = app
        .accounts()
        .find_by_credentials(&creds.login, &creds.password)
        .await?
        .ok_or(UserHubError::Unauthorized)?;

    let session_id = app.sessions().create(account.clone());
    tracing::info!(id = %account.id, login = %account.login, "session created");

    Ok((jar.add(cookie::issue(session_id)), Json(account)))
}

pub async fn signin() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": SIGNIN_MESSAGE })))
}

/// Forward-auth lookup. 401 without a cookie; otherwise the session's
/// account as `X-*` headers, empty when the session is unknown.
pub async fn auth(State(app): State<AppState>, jar: CookieJar) -> Response {
    let Some(session_id) = cookie::session_id(&jar) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let account = app.sessions().get(&session_id).unwrap_or_else(|| {
        tracing::debug!("auth with unknown session");
        Account::default()
    });

    (StatusCode::OK, identity_headers(&account)).into_response()
}

pub async fn logout(State(app): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session_id) = cookie::session_id(&jar) {
        if let Some(account) = app.sessions().remove(&session_id) {
            tracing::info!(id = %account.id, "session closed");
        }
    }

    (StatusCode::OK, jar.add(cookie::clear()))
}

fn identity_headers(account: &Account) -> HeaderMap {
    let fields = [
        ("x-userid", &account.id),
        ("x-user", &account.login),
        ("x-email", &account.email),
        ("x-first-name", &account.first_name),
        ("x-last-name", &account.last_name),
    ];

    let mut headers = HeaderMap::with_capacity(fields.len());
    for (name, value) in fields {
        // Values that cannot travel in a header are sent empty.
        let value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
        headers.insert(HeaderName::from_static(name), value);
    }
    headers
}
