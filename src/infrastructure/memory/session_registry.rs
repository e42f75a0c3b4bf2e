//! In-Memory Session Registry Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{SessionError, SessionRegistryPort, UserSession};

/// 内存会话表，按用户名索引
pub struct InMemorySessionRegistry {
    sessions: DashMap<String, UserSession>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistryPort for InMemorySessionRegistry {
    fn open(&self, session: UserSession) {
        let username = session.username.clone();
        if self.sessions.insert(username.clone(), session).is_some() {
            tracing::debug!(username = %username, "Session replaced");
        } else {
            tracing::debug!(username = %username, "Session opened");
        }
    }

    fn get(&self, username: &str) -> Option<UserSession> {
        self.sessions.get(username).map(|s| s.clone())
    }

    fn is_open_with(&self, username: &str, token: &str) -> bool {
        self.sessions
            .get(username)
            .map(|s| s.token == token)
            .unwrap_or(false)
    }

    fn touch(&self, username: &str) {
        if let Some(mut session) = self.sessions.get_mut(username) {
            session.last_activity = Utc::now();
        }
    }

    fn close(&self, username: &str) -> Result<UserSession, SessionError> {
        self.sessions
            .remove(username)
            .map(|(_, session)| {
                tracing::debug!(username = %username, "Session closed");
                session
            })
            .ok_or_else(|| SessionError::NotFound(username.to_string()))
    }

    fn list_all(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let registry = InMemorySessionRegistry::new();

        // Open
        registry.open(UserSession::new("alice", "tok"));
        assert!(registry.is_open_with("alice", "tok"));
        assert!(!registry.is_open_with("alice", "other"));
        assert!(!registry.is_open_with("bob", "tok"));

        // Touch
        let before = registry.get("alice").unwrap().last_activity;
        registry.touch("alice");
        assert!(registry.get("alice").unwrap().last_activity >= before);

        // Replace
        registry.open(UserSession::new("alice", "tok2"));
        assert!(registry.is_open_with("alice", "tok2"));
        assert_eq!(registry.list_all(), vec!["alice".to_string()]);

        // Close
        let closed = registry.close("alice").unwrap();
        assert_eq!(closed.token, "tok2");
        assert!(registry.get("alice").is_none());
        assert!(matches!(registry.close("alice"), Err(SessionError::NotFound(_))));
    }
}
