use dashmap::DashMap;
use uuid::Uuid;

use userhub_core::model::Account;

/// In-memory session table: `session_id -> Account`.
///
/// Sessions live until logout or process exit. There is no expiry and no
/// capacity bound.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, Account>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Store `account` under a new random id and return the id.
    pub fn create(&self, account: Account) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), account);
        session_id
    }

    pub fn get(&self, session_id: &str) -> Option<Account> {
        self.sessions.get(session_id).map(|r| r.value().clone())
    }

    pub fn remove(&self, session_id: &str) -> Option<Account> {
        self.sessions.remove(session_id).map(|(_, account)| account)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
