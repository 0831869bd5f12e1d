//! Shared application state for the auth service.

use std::sync::Arc;

use userhub_core::config::DatabaseSection;
use userhub_core::{db, Result};

use crate::session::SessionStore;
use crate::store::{AccountStore, PgAccountStore};

#[derive(Clone)]
pub struct AppState {
    accounts: Arc<dyn AccountStore>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            accounts,
            sessions: Arc::new(SessionStore::new()),
        }
    }

    /// Open the Postgres pool and build state around it.
    pub async fn connect(cfg: &DatabaseSection) -> Result<Self> {
        let pool = db::connect(cfg).await?;
        Ok(Self::new(Arc::new(PgAccountStore::new(pool))))
    }

    pub fn accounts(&self) -> &dyn AccountStore {
        self.accounts.as_ref()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
