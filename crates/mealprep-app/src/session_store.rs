//! Session persistence
//!
//! Stores keep the token (under the `"token"` key) and the user between runs.
//! Store I/O is driven by the engine through `UpdateAction`s; `update` never
//! touches a store.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use mealprep_core::prelude::*;
use mealprep_core::{CurrentUser, Session, SessionToken};

use crate::config::{SessionSettings, StoreKind};

/// Persisted form of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: SessionToken,
    #[serde(default)]
    pub user: Option<CurrentUser>,
}

impl StoredSession {
    pub fn new(token: SessionToken, user: Option<CurrentUser>) -> Self {
        Self { token, user }
    }

    pub fn into_session(self) -> Session {
        Session::authenticated(self.token, self.user)
    }
}

/// Key-value slot holding the session token
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Store that forgets everything on exit
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| Error::session_store("memory store poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::session_store("memory store poisoned"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::session_store("memory store poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// JSON file store: `{"token": "...", "user": {...}}`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            debug!("No session file at {:?}", self.path);
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredSession = serde_json::from_str(&content).map_err(|e| {
            Error::session_store(format!("Invalid session file {:?}: {}", self.path, e))
        })?;

        if stored.token.is_blank() {
            return Ok(None);
        }
        Ok(Some(stored))
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::session_store(format!("Failed to open session file: {}", e)))?;

        file.lock_exclusive()
            .map_err(|e| Error::session_store(format!("Failed to lock session file: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::session_store(format!("Failed to write session file: {}", e)))?;
        file.flush()
            .map_err(|e| Error::session_store(format!("Failed to flush session file: {}", e)))?;

        // Lock is released when the file is dropped
        debug!("Saved session to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Build the store selected in settings
pub fn store_from_settings(settings: &SessionSettings) -> Arc<dyn SessionStore> {
    match settings.store {
        StoreKind::Memory => Arc::new(MemorySessionStore::new()),
        StoreKind::File => Arc::new(FileSessionStore::new(settings.file_path())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn stored() -> StoredSession {
        StoredSession::new(
            SessionToken::new("abc123"),
            Some(CurrentUser::new("cook@example.com").with_full_name("Ada")),
        )
    }

    #[test]
    fn test_memory_store_save_load_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&stored()).unwrap();
        assert_eq!(store.load().unwrap(), Some(stored()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_writes_token_key() {
        let temp = tempdir().unwrap();
        let store = FileSessionStore::new(temp.path().join("nested").join("session.json"));

        store.save(&stored()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[mealprep_core::TOKEN_KEY], "abc123");
        assert_eq!(value["user"]["email"], "cook@example.com");

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, stored());
        assert!(loaded.into_session().is_authenticated());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = FileSessionStore::new(temp.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let temp = tempdir().unwrap();
        let store = FileSessionStore::new(temp.path().join("session.json"));
        store.save(&stored()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::SessionStore { .. }));
    }

    #[test]
    fn test_file_store_blank_token_is_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("session.json");
        std::fs::write(&path, r#"{"token": "  "}"#).unwrap();

        assert!(FileSessionStore::new(&path).load().unwrap().is_none());
    }

    #[test]
    fn test_store_from_settings() {
        let settings = SessionSettings {
            store: StoreKind::Memory,
            path: None,
        };
        let store = store_from_settings(&settings);
        assert!(store.load().unwrap().is_none());
    }
}
