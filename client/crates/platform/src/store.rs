//! Session Persistence
//!
//! Keeps the session between runs. Implementations:
//! - [`MemorySessionStore`] for tests and one-shot use
//! - [`FileSessionStore`] for the command line client

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use kernel::error::app_error::{AppError, AppResult};

use crate::session::Session;

/// Trait for session persistence backends
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Load the persisted session, `None` if there is none
    async fn load(&self) -> AppResult<Option<Session>>;

    /// Persist a session, replacing any previous one
    async fn save(&self, session: &Session) -> AppResult<()>;

    /// Forget the persisted session
    async fn clear(&self) -> AppResult<()>;
}

/// Session store that lives for the process only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: tokio::sync::Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Option<Session>> {
        Ok(self.session.lock().await.clone())
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        *self.session.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.session.lock().await = None;
        Ok(())
    }
}

/// Session store backed by a JSON file
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
    async fn load(&self) -> AppResult<Option<Session>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::internal("Failed to read session file").with_source(e));
            }
        };
        match serde_json::from_str::<Session>(&text) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Session file is corrupt, ignoring it"
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(session)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| AppError::internal("Failed to write session file").with_source(e))
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal("Failed to remove session file").with_source(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSessionStore, MemorySessionStore, SessionStore};
    use crate::session::tests::live_session;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());
        store.save(&live_session()).await.unwrap();
        assert_eq!(
            store.load().await.unwrap().map(|s| s.username),
            Some(Some("li".to_string()))
        );
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.load().await.unwrap().is_none());

        let session = live_session();
        store.save(&session).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session));

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "{not json").await.unwrap();
        let store = FileSessionStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save(&live_session()).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["userId"], "42");
        assert_eq!(json["role"], "farmer");
    }
}
