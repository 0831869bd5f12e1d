//! Record types shared by the services and their stores.
//!
//! Column names are the lower-cased forms Postgres gives the unquoted
//! `firstName`/`lastName` identifiers.

use serde::{Deserialize, Serialize};

/// Registered account (auth service).
///
/// The password is accepted when deserializing but never written back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    #[sqlx(rename = "firstname")]
    pub first_name: String,
    #[serde(default)]
    #[sqlx(rename = "lastname")]
    pub last_name: String,
}

/// `POST /register` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registration {
    pub login: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    /// Turn the registration into an account under a freshly issued id.
    pub fn into_account(self, id: String) -> Account {
        Account {
            id,
            login: self.login,
            password: self.password,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// `POST /login` body. Extra account fields in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// User record (users service). `id` is assigned by the database; any `id`
/// in a request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "firstname")]
    pub first_name: String,
    #[sqlx(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// Same record under another id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
