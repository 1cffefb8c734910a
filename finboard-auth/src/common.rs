use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Authenticated user the dashboard API calls are made for.
#[derive(Debug)]
pub struct Session {
    pub login: String,
    pub token: SecretString,
}

impl Session {
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: SecretString::from(token.into()),
        }
    }
}

/// On-disk form of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub login: String,
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            login: session.login.clone(),
            token: session.token.expose_secret().to_string(),
            saved_at: Utc::now(),
        }
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session::new(stored.login, stored.token)
    }
}
