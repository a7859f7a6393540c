//! File-backed storage
//!
//! ```text
//! data_dir/
//! ├── boards.json      # JSON array of boards
//! ├── dark-mode.json   # JSON boolean
//! └── activity.jsonl   # one entry per line, oldest first
//! ```

use super::Storage;
use crate::error::Result;
use crate::types::{ActivityEntry, AppState, Board};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Storage rooted at a data directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the boards key
    pub fn boards_path(&self) -> PathBuf {
        self.root.join("boards.json")
    }

    /// Path to the theme key
    pub fn dark_mode_path(&self) -> PathBuf {
        self.root.join("dark-mode.json")
    }

    /// Path to the activity log
    pub fn activity_path(&self) -> PathBuf {
        self.root.join("activity.jsonl")
    }

    async fn read_optional(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> Result<AppState> {
        let boards = match Self::read_optional(&self.boards_path()).await? {
            Some(content) => serde_json::from_str(&content)?,
            None => Vec::new(),
        };
        let dark_mode = match Self::read_optional(&self.dark_mode_path()).await? {
            Some(content) => serde_json::from_str(&content)?,
            None => false,
        };
        tracing::debug!(root = %self.root.display(), boards = boards.len(), "loaded state");
        Ok(AppState::new(boards, dark_mode))
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        let content = serde_json::to_string_pretty(boards)?;
        atomic_write(&self.boards_path(), content.as_bytes()).await
    }

    async fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        let content = serde_json::to_string(&dark_mode)?;
        atomic_write(&self.dark_mode_path(), content.as_bytes()).await
    }

    async fn append_activity(&self, entry: &ActivityEntry) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.activity_path())
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<ActivityEntry>> {
        let Some(content) = Self::read_optional(&self.activity_path()).await? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for line in content.lines().rev() {
            if limit.is_some_and(|n| entries.len() >= n) {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ActivityEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable activity line"),
            }
        }
        Ok(entries)
    }
}

/// Write to a temp file in the same directory, then rename over the target
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}
