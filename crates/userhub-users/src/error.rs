//! HTTP rendering of `UserHubError`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use userhub_core::error::{ClientCode, UserHubError};

/// Request-scoped failure. Renders as `(status, Json(ErrorBody))`.
#[derive(Debug)]
pub struct ApiError(pub UserHubError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<UserHubError> for ApiError {
    fn from(err: UserHubError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "request body rejected");
        Self(UserHubError::BadRequest(
            "Unable to decode the request body.".into(),
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "path parameter rejected");
        Self(UserHubError::BadRequest(
            "Unable to convert the string into int.".into(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        if code == ClientCode::Internal {
            tracing::error!(error = %self.0, "request failed");
        }

        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}
