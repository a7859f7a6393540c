//! In-memory storage for tests and throwaway sessions

use super::Storage;
use crate::error::Result;
use crate::types::{ActivityEntry, AppState, Board};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    state: AppState,
    activity: Vec<ActivityEntry>,
    board_saves: usize,
    theme_saves: usize,
}

/// Storage that keeps everything in process memory
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already populated state
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state,
                ..Inner::default()
            }),
        }
    }

    /// The state as last saved
    pub fn saved_state(&self) -> AppState {
        self.lock().state.clone()
    }

    /// How many times boards were written
    pub fn board_saves(&self) -> usize {
        self.lock().board_saves
    }

    /// How many times the theme flag was written
    pub fn theme_saves(&self) -> usize {
        self.lock().theme_saves
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Poisoned only after a panic mid-write; the data stays consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> Result<AppState> {
        Ok(self.lock().state.clone())
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        let mut inner = self.lock();
        inner.state.boards = boards.to_vec();
        inner.board_saves += 1;
        Ok(())
    }

    async fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        let mut inner = self.lock();
        inner.state.dark_mode = dark_mode;
        inner.theme_saves += 1;
        Ok(())
    }

    async fn append_activity(&self, entry: &ActivityEntry) -> Result<()> {
        self.lock().activity.push(entry.clone());
        Ok(())
    }

    async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<ActivityEntry>> {
        let inner = self.lock();
        let newest_first = inner.activity.iter().rev().cloned();
        Ok(match limit {
            Some(n) => newest_first.take(n).collect(),
            None => newest_first.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_counters() {
        let storage = MemoryStorage::new();
        storage.save_boards(&[Board::new("Home")]).await.unwrap();
        storage.save_dark_mode(true).await.unwrap();

        let state = storage.load().await.unwrap();
        assert_eq!(state.boards.len(), 1);
        assert!(state.dark_mode);
        assert_eq!(storage.board_saves(), 1);
        assert_eq!(storage.theme_saves(), 1);
    }

    #[tokio::test]
    async fn test_activity_newest_first() {
        let storage = MemoryStorage::new();
        for op in ["add board", "add list", "add task"] {
            let entry = ActivityEntry::new(op, serde_json::json!({}), serde_json::json!({}), None, 0);
            storage.append_activity(&entry).await.unwrap();
        }
        let entries = storage.read_activity(Some(2)).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].op, "add task");
        assert_eq!(entries[1].op, "add list");
    }
}
