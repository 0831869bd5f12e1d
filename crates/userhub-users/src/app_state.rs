//! Shared application state for the users service.

use std::sync::Arc;

use userhub_core::config::DatabaseSection;
use userhub_core::{db, Result};

use crate::obs::UserMetrics;
use crate::store::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UserStore>,
    metrics: Arc<UserMetrics>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            metrics: Arc::new(UserMetrics::default()),
        }
    }

    /// Open the Postgres pool and build state around it.
    pub async fn connect(cfg: &DatabaseSection) -> Result<Self> {
        let pool = db::connect(cfg).await?;
        Ok(Self::new(Arc::new(PgUserStore::new(pool))))
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub fn metrics(&self) -> Arc<UserMetrics> {
        Arc::clone(&self.metrics)
    }
}
