use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{DEFAULT_SESSION_IDLE_TIMEOUT, entities::app_errors::CoreError},
    diagnostic::{
        entities::{DiagnosticSession, errors::DiagnosticError},
        ports::DiagnosticSessionRepository,
        value_objects::SessionCommand,
    },
};

/// Process-local session store. Sessions are lost on restart.
///
/// A session untouched for longer than the idle timeout is treated as gone and
/// is evicted the next time a session is created.
#[derive(Debug, Clone)]
pub struct InMemoryDiagnosticSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, DiagnosticSession>>>,
    idle_timeout: TimeDelta,
}

impl InMemoryDiagnosticSessionRepository {
    pub fn new() -> Self {
        Self::with_idle_timeout(DEFAULT_SESSION_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout: TimeDelta::from_std(idle_timeout).unwrap_or(TimeDelta::MAX),
        }
    }

    fn is_expired(&self, session: &DiagnosticSession, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(session.updated_at) > self.idle_timeout
    }
}

impl Default for InMemoryDiagnosticSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSessionRepository for InMemoryDiagnosticSessionRepository {
    async fn create(&self, session: DiagnosticSession) -> Result<DiagnosticSession, CoreError> {
        let mut sessions = self.sessions.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "evicted idle diagnostic sessions");
        }

        if sessions.contains_key(&session.id) {
            tracing::error!(session_id = %session.id, "duplicate diagnostic session id");
            return Err(CoreError::InternalServerError);
        }
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<DiagnosticSession>, CoreError> {
        let sessions = self.sessions.read().await;
        let now = Utc::now();

        Ok(sessions
            .get(&session_id)
            .filter(|session| !self.is_expired(session, now))
            .cloned())
    }

    async fn update(
        &self,
        session_id: Uuid,
        command: SessionCommand,
    ) -> Result<DiagnosticSession, CoreError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        let stored = sessions
            .get_mut(&session_id)
            .filter(|session| !self.is_expired(session, now))
            .ok_or(DiagnosticError::SessionNotFound)?;

        let mut session = stored.clone();
        session.apply(command)?;
        *stored = session.clone();

        Ok(session)
    }

    async fn delete(&self, session_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }
}
