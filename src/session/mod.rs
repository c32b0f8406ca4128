//! Session management - wizard state machine and in-memory store
//!
//! Sessions live only in memory; a restart clears them all. Each session
//! is independent, so the store is a simple locked map.

mod questions;
mod wizard;

pub use questions::{
    questions_for, Question, BASIC_QUESTIONS, DEEP_FOLLOW_UP_QUESTIONS, FOLLOW_UP_QUESTIONS,
};
pub use wizard::{reset, submit, Session, SessionOutcome, WizardState, MIN_DETAIL_CHARS};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;

/// In-memory session store
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    counter: AtomicU64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new session ID
    fn generate_session_id(&self) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("sess_{:x}_{:x}", timestamp, seq)
    }

    /// Create and register a fresh session
    pub fn create(&self) -> Session {
        let session = Session::new(self.generate_session_id());
        self.sessions
            .write()
            .insert(session.id.clone(), session.clone());
        session
    }

    /// Snapshot of one session
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().get(id).cloned()
    }

    /// Run a mutation against one session, returning its result.
    /// None when the session does not exist.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions.write().get_mut(id).map(f)
    }

    /// Active session count
    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }
}
