//! File-based credential store
//!
//! Persists the logged-in `AuthSession` to a local JSON file in the
//! application data directory, standing in for browser local storage.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use sp_core::ports::SessionStorePort;
use sp_core::AuthSession;

pub const DEFAULT_SESSION_FILE: &str = ".session";

pub struct FileSessionRepository {
    session_file_path: PathBuf,
}

impl FileSessionRepository {
    /// Create repository with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self { session_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            session_file_path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.session_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionRepository {
    async fn load(&self) -> anyhow::Result<Option<AuthSession>> {
        if !self.session_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.session_file_path).await?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: AuthSession = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stored session: {e}"))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &AuthSession) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session: {e}"))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {e}"))?;

        debug!(path = %self.session_file_path.display(), "session stored");
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.session_file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::anyhow!("Failed to remove session file: {e}")),
        }
    }
}
