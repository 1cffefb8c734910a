use crate::common::{Session, StoredSession};
use crate::error::AuthError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::Configuration("Could not find cache directory".to_string()))?
            .join("finboard");

        Self::in_dir(&cache_dir)
    }

    /// Store rooted at `dir`, created if missing.
    pub fn in_dir(dir: &Path) -> Result<Self, AuthError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                AuthError::SessionStorage(format!("Failed to create cache directory: {}", e))
            })?;
        }

        Ok(Self {
            session_path: dir.join("session.json"),
        })
    }

    pub fn save_session(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(&StoredSession::from(session))?;

        fs::write(&self.session_path, json)
            .map_err(|e| AuthError::SessionStorage(format!("Failed to save session: {}", e)))?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)
                .map_err(|e| {
                    AuthError::SessionStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms).map_err(|e| {
                AuthError::SessionStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        tracing::debug!("Session for {} saved", session.login);
        Ok(())
    }

    pub fn load_session(&self) -> Result<Option<Session>, AuthError> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.session_path)
            .map_err(|e| AuthError::SessionStorage(format!("Failed to read session: {}", e)))?;

        let stored: StoredSession = serde_json::from_str(&json)?;
        Ok(Some(stored.into()))
    }
}
