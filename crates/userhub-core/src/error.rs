//! Shared error type across userhub crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed body or path parameter.
    BadRequest,
    /// Missing or invalid credentials.
    Unauthorized,
    /// Record does not exist.
    NotFound,
    /// Record clashes with an existing one.
    Conflict,
    /// Internal server error (database included).
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Unauthorized => "UNAUTHORIZED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status number carried in the `Error` body.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::Unauthorized => 401,
            ClientCode::NotFound => 404,
            ClientCode::Conflict => 409,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, UserHubError>;

/// Unified error type used by core and both services.
#[derive(Debug, Error)]
pub enum UserHubError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database: {0}")]
    Database(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl UserHubError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            UserHubError::BadRequest(_) => ClientCode::BadRequest,
            UserHubError::Unauthorized => ClientCode::Unauthorized,
            UserHubError::NotFound(_) => ClientCode::NotFound,
            UserHubError::Conflict(_) => ClientCode::Conflict,
            UserHubError::Database(_) | UserHubError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to send to a client. Driver and internal details stay in
    /// the logs.
    pub fn client_message(&self) -> String {
        match self {
            UserHubError::BadRequest(msg)
            | UserHubError::NotFound(msg)
            | UserHubError::Conflict(msg) => msg.clone(),
            UserHubError::Unauthorized => "unauthorized".to_string(),
            UserHubError::Database(_) => "database error".to_string(),
            UserHubError::Internal(_) => "internal error".to_string(),
        }
    }

    /// Serializable `Error` record for this failure.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.client_code().http_status(),
            message: self.client_message(),
        }
    }
}

impl From<sqlx::Error> for UserHubError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserHubError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                tracing::warn!(error = %db_err, "unique constraint violated");
                UserHubError::Conflict("record already exists".into())
            }
            other => UserHubError::Database(other.to_string()),
        }
    }
}

/// `Error` record written to clients on every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}
