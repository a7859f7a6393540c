//! TaskboardContext - the state store
//!
//! The context owns the current [`AppState`], the current [`View`], and the
//! persistence port. Commands compute a replacement state from a snapshot and hand
//! it to [`TaskboardContext::update`], which commits it and writes the keys that
//! changed. Commands never mutate state in place.

use crate::error::{Result, TaskboardError};
use crate::storage::{MemoryStorage, Storage};
use crate::types::{AppState, Board, BoardId, View};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Context passed to every command
pub struct TaskboardContext {
    storage: Arc<dyn Storage>,
    state: RwLock<AppState>,
    view: RwLock<View>,
}

impl TaskboardContext {
    /// Load persisted state from `storage` and start on the dashboard
    pub async fn open(storage: impl Storage + 'static) -> Result<Self> {
        Self::open_shared(Arc::new(storage)).await
    }

    /// Like [`open`](Self::open) for storage the caller keeps a handle to
    pub async fn open_shared(storage: Arc<dyn Storage>) -> Result<Self> {
        let state = storage.load().await?;
        state.validate()?;
        tracing::debug!(
            boards = state.boards.len(),
            dark_mode = state.dark_mode,
            "opened taskboard context"
        );
        Ok(Self {
            storage,
            state: RwLock::new(state),
            view: RwLock::new(View::Dashboard),
        })
    }

    /// An empty context backed by memory only
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            state: RwLock::new(AppState::default()),
            view: RwLock::new(View::Dashboard),
        }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Snapshot of the whole state tree
    pub async fn state(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Snapshot of one board
    pub async fn board(&self, id: &BoardId) -> Result<Board> {
        self.state
            .read()
            .await
            .find_board(id)
            .cloned()
            .ok_or_else(|| TaskboardError::BoardNotFound { id: id.to_string() })
    }

    pub async fn view(&self) -> View {
        self.view.read().await.clone()
    }

    pub async fn set_view(&self, view: View) {
        *self.view.write().await = view;
    }

    /// Replace the state with the value `change` derives from the current one.
    ///
    /// The write lock is held across compute and persist, so commits never
    /// interleave. A result equal to the current state is not written. If the
    /// open board disappears, the view falls back to the dashboard. On a storage
    /// error the in-memory state keeps its previous value, and boards written
    /// before a failed theme write are rewritten to their previous value.
    pub async fn update<F>(&self, change: F) -> Result<AppState>
    where
        F: FnOnce(&AppState) -> Result<AppState>,
    {
        let mut guard = self.state.write().await;
        let next = change(&*guard)?;

        if next == *guard {
            tracing::debug!("state unchanged; nothing to persist");
            return Ok(next);
        }

        next.validate()?;

        let boards_changed = next.boards != guard.boards;
        if boards_changed {
            self.storage.save_boards(&next.boards).await?;
        }
        if next.dark_mode != guard.dark_mode {
            if let Err(e) = self.storage.save_dark_mode(next.dark_mode).await {
                // Boards already hit disk; put the previous ones back.
                if boards_changed {
                    if let Err(restore) = self.storage.save_boards(&guard.boards).await {
                        tracing::warn!(error = %restore, "failed to restore previous boards");
                    }
                }
                return Err(e);
            }
        }

        *guard = next.clone();

        let mut view = self.view.write().await;
        if let View::Board(open) = &*view {
            if next.find_board(open).is_none() {
                tracing::debug!(board = %open, "open board removed; returning to dashboard");
                *view = View::Dashboard;
            }
        }

        tracing::info!(boards = next.boards.len(), "state committed");
        Ok(next)
    }

    /// Write both keys unconditionally
    pub async fn flush(&self) -> Result<()> {
        let state = self.state.read().await;
        self.storage.save_boards(&state.boards).await?;
        self.storage.save_dark_mode(state.dark_mode).await?;
        Ok(())
    }
}
