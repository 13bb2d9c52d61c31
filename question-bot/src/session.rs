//! Per-user session state: whether the next text message is a question to relay.
//!
//! Held in memory for the process lifetime; lost on restart.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingQuestion,
}

/// Cloneable handle to the shared user → state map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<i64, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state; users never seen are Idle.
    pub async fn state(&self, user_id: i64) -> SessionState {
        self.inner
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    /// Idle → AwaitingQuestion (also when already awaiting).
    pub async fn begin_question(&self, user_id: i64) {
        self.inner
            .write()
            .await
            .insert(user_id, SessionState::AwaitingQuestion);
    }

    /// Claims the pending question: if AwaitingQuestion, sets Idle and returns true.
    /// At most one caller observes true per button press.
    pub async fn take_question(&self, user_id: i64) -> bool {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&user_id) {
            Some(state) if *state == SessionState::AwaitingQuestion => {
                *state = SessionState::Idle;
                true
            }
            _ => false,
        }
    }

    pub async fn reset(&self, user_id: i64) {
        self.inner.write().await.remove(&user_id);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
