use async_trait::async_trait;
use sqlx::PgPool;

use userhub_core::error::Result;
use userhub_core::model::User;

/// Persistence seam for user records. Production uses [`PgUserStore`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert and return the database-assigned id. `user.id` is ignored.
    async fn insert(&self, user: &User) -> Result<i64>;

    async fn get(&self, id: i64) -> Result<Option<User>>;

    /// Overwrite every field of row `id`. Returns the affected row count.
    async fn update(&self, id: i64, user: &User) -> Result<u64>;

    /// Returns the affected row count.
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, firstName, lastName, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "user inserted");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, firstName, lastName, email, phone FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i64, user: &User) -> Result<u64> {
        let res = sqlx::query(
            "UPDATE users
             SET username = $2, firstName = $3, lastName = $4, email = $5, phone = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id, rows = res.rows_affected(), "user updated");
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = res.rows_affected(), "user deleted");
        Ok(res.rows_affected())
    }
}
