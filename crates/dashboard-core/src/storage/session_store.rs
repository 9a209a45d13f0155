//! Session persistence
//!
//! The auth service hydrates its [`Session`] from a [`SessionStore`] on
//! start-up and writes it back on login/logout. Two real backends exist: the
//! OS keyring and a JSON file next to the configuration.

use super::Result;
use crate::core::auth::User;
use crate::core::session::Session;
use crate::error::StorageError;
use keyring::Entry;
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const KEYRING_SERVICE: &str = "dashboard-cli";
pub const SESSION_FILE_NAME: &str = "session.json";

pub trait SessionStore: Send + Sync {
    /// Missing data is an empty session, not an error.
    fn load(&self) -> Result<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keyring entries `token-<profile>` and `user-<profile>`.
pub struct KeyringSessionStore {
    profile: String,
}

impl KeyringSessionStore {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    fn entry(&self, key_type: &str) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, &format!("{}-{}", key_type, self.profile))
            .map_err(|e| StorageError::KeyringError(e.to_string()))
    }

    fn read(&self, key_type: &str) -> Result<Option<String>> {
        match self.entry(key_type)?.get_password() {
            Ok(v) => Ok(Some(v)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StorageError::KeyringError(e.to_string())),
        }
    }

    fn write(&self, key_type: &str, value: &str) -> Result<()> {
        self.entry(key_type)?
            .set_password(value)
            .map_err(|e| StorageError::KeyringError(e.to_string()))
    }

    fn delete(&self, key_type: &str) -> Result<()> {
        match self.entry(key_type)?.delete_credential() {
            Ok(_) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::KeyringError(e.to_string())),
        }
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new("default")
    }
}

impl SessionStore for KeyringSessionStore {
    fn load(&self) -> Result<Session> {
        let token = self.read("token")?;
        let user = match self.read("user")? {
            Some(raw) => serde_json::from_str::<User>(&raw)
                .inspect_err(|e| warn!("ignoring unreadable stored user: {}", e))
                .ok(),
            None => None,
        };
        Ok(Session { user, token })
    }

    fn save(&self, session: &Session) -> Result<()> {
        match &session.token {
            Some(token) => self.write("token", token)?,
            None => self.delete("token")?,
        }
        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|e| {
                    StorageError::SessionParseError {
                        message: e.to_string(),
                    }
                })?;
                self.write("user", &raw)?;
            }
            None => self.delete("user")?,
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.delete("token")?;
        self.delete("user")
    }
}

/// JSON file, `session.json` in the config directory by default.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::default()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| StorageError::SessionParseError {
            message: format!("{}: {}", self.path.display(), e),
        })
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content =
            serde_json::to_string_pretty(session).map_err(|e| StorageError::SessionParseError {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Process-local store for tests and one-shot runs.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session> {
        Ok(self.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = Session::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn signed_in() -> Session {
        Session {
            user: Some(User {
                id: 7,
                name: "Admin".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
            }),
            token: Some("demo-token".to_string()),
        }
    }

    #[test]
    fn test_file_store_roundtrip_and_clear() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = FileSessionStore::in_dir(&temp_dir.path().join("cfg"));

        assert_eq!(store.load().unwrap(), Session::default());

        store.save(&signed_in()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), signed_in());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), Session::default());

        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = FileSessionStore::in_dir(temp_dir.path());
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(StorageError::SessionParseError { .. })
        ));
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert!(!store.load().unwrap().is_authenticated());
        store.save(&signed_in()).unwrap();
        assert_eq!(store.load().unwrap(), signed_in());
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Session::default());
    }
}
