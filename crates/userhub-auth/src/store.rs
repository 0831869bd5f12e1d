use async_trait::async_trait;
use sqlx::PgPool;

use userhub_core::error::Result;
use userhub_core::model::Account;

/// Persistence seam for accounts. Production uses [`PgAccountStore`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account and return its id.
    async fn insert(&self, account: &Account) -> Result<String>;

    /// Account whose login and password both match, if any.
    async fn find_by_credentials(&self, login: &str, password: &str) -> Result<Option<Account>>;
}

pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert(&self, account: &Account) -> Result<String> {
        let id: String = sqlx::query_scalar(
            "INSERT INTO users (id, login, password, email, firstName, lastName)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&account.id)
        .bind(&account.login)
        .bind(&account.password)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(%id, "account inserted");
        Ok(id)
    }

    async fn find_by_credentials(&self, login: &str, password: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, login, password, email, firstName, lastName
             FROM users
             WHERE login = $1 AND password = $2",
        )
        .bind(login)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }
}
