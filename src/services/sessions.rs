use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::{PredictionSession, SharedSession};

/// In-memory store of interactive prediction sessions
///
/// Sessions are evicted after sitting idle for the configured time, or when the
/// store grows past its capacity.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, SharedSession>,
}

impl SessionStore {
    pub fn new(capacity: u64, idle_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(capacity)
            .time_to_idle(Duration::from_secs(idle_secs))
            .build();

        Self { sessions }
    }

    /// Start a new, empty session
    pub async fn create(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(PredictionSession::new()));
        self.sessions.insert(id, session.clone()).await;

        tracing::debug!("Created prediction session {}", id);
        (id, session)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SessionStore::new(10, 60);
        let (id, session) = store.create().await;

        let fetched = store.get(&id).await.expect("session should exist");
        assert!(Arc::ptr_eq(&session, &fetched));
        assert!(store.get(&Uuid::new_v4()).await.is_none());
    }
}
