//! In-memory visitor session store
//!
//! Owns every visitor's dialog record, keyed by an opaque identifier
//! supplied by the transport. All mutation goes through
//! `handle_message`; a message for an unknown identifier is first
//! contact and creates the record lazily. Nothing survives a restart.

use crate::state_machine::{transition, Stage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// One visitor's dialog record.
#[derive(Debug)]
struct VisitorSession {
    stage: Stage,
    last_seen: Instant,
}

impl VisitorSession {
    fn new() -> Self {
        Self {
            stage: Stage::default(),
            last_seen: Instant::now(),
        }
    }
}

/// Process-wide session registry.
///
/// The outer lock guards the map shape only; each session has its own
/// mutex, so a visitor's read-modify-write is serialized while other
/// visitors proceed independently.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<VisitorSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Feed one visitor message through the dialog and return the reply.
    ///
    /// Infallible: invalid input is answered with a re-prompt, never an
    /// error.
    pub async fn handle_message(&self, visitor_id: &str, message: &str) -> String {
        let session = self.get_or_create(visitor_id).await;
        let mut guard = session.lock().await;

        let result = transition(guard.stage, message);
        if result.new_stage != guard.stage {
            tracing::info!(
                visitor_id = %visitor_id,
                from = guard.stage.name(),
                to = result.new_stage.name(),
                "dialog advanced"
            );
        }
        if result.new_stage.is_terminal() && !guard.stage.is_terminal() {
            tracing::info!(visitor_id = %visitor_id, "intake complete");
        }

        guard.stage = result.new_stage;
        guard.last_seen = Instant::now();
        result.reply
    }

    /// Current stage, if the visitor has a session.
    pub async fn stage(&self, visitor_id: &str) -> Option<Stage> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(visitor_id)?.clone();
        drop(sessions);
        let stage = session.lock().await.stage;
        Some(stage)
    }

    /// Forget a session so the next message restarts the dialog.
    pub async fn remove(&self, visitor_id: &str) -> bool {
        self.sessions.write().await.remove(visitor_id).is_some()
    }

    /// Drop sessions idle longer than `ttl`. Sessions currently locked
    /// by an in-flight message are skipped. Returns how many were
    /// evicted.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => guard.last_seen.elapsed() <= ttl,
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Periodically evict idle sessions.
    pub fn spawn_sweeper(
        self: Arc<Self>,
        ttl: Duration,
        period: Duration,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(period);
            // the first tick completes immediately
            tick.tick().await;
            loop {
                tick.tick().await;
                let evicted = self.evict_idle(ttl).await;
                if evicted > 0 {
                    tracing::info!(evicted, "evicted idle sessions");
                }
            }
        })
    }

    async fn get_or_create(&self, visitor_id: &str) -> Arc<Mutex<VisitorSession>> {
        if let Some(session) = self.sessions.read().await.get(visitor_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(visitor_id.to_string())
            .or_insert_with(|| {
                tracing::info!(visitor_id = %visitor_id, "session created");
                Arc::new(Mutex::new(VisitorSession::new()))
            })
            .clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
