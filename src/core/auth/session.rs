//! In-memory bearer sessions

use crate::domain::{ClinicError, Result};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// Generates a random bearer token (URL-safe base64, 32 bytes of entropy)
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// SHA-256 digest of a bearer token
pub fn hash_token(token: &str) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

/// A live session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// A freshly opened session, carrying the only copy of the plain token
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Tracks open sessions keyed by token digest
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<[u8; 32], Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a session for an already verified user
    ///
    /// Expired sessions are purged on the way.
    pub fn open(&self, username: &str) -> Result<IssuedSession> {
        let token = generate_token();
        let now = Utc::now();
        let session = Session {
            username: username.to_string(),
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(hash_token(&token), session.clone());

        Ok(IssuedSession { token, session })
    }

    /// Returns the session behind `token` if it exists and has not expired
    pub fn validate(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().ok()?;
        sessions
            .get(&hash_token(token))
            .filter(|s| s.expires_at > Utc::now())
            .cloned()
    }

    /// Closes the session behind `token`, returning whether one was open
    pub fn revoke(&self, token: &str) -> Result<bool> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        Ok(sessions.remove(&hash_token(token)).is_some())
    }

    /// Number of sessions held, expired ones included until the next purge
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> ClinicError {
    ClinicError::Other("session store lock poisoned".to_string())
}
