//! Persistence port
//!
//! The state store never touches the filesystem directly. It is handed a
//! [`Storage`] at construction and calls it after every committed change. Each
//! save is a full overwrite of its key, so a crash between a state change and its
//! save loses that change but never leaves a half-written file.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;
use crate::types::{ActivityEntry, AppState, Board};
use async_trait::async_trait;

/// Where boards, the theme flag and the activity log live between sessions
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read everything persisted so far. Missing keys load as empty defaults.
    async fn load(&self) -> Result<AppState>;

    /// Overwrite the stored board collection
    async fn save_boards(&self, boards: &[Board]) -> Result<()>;

    /// Overwrite the stored theme flag
    async fn save_dark_mode(&self, dark_mode: bool) -> Result<()>;

    /// Append one entry to the activity log
    async fn append_activity(&self, entry: &ActivityEntry) -> Result<()>;

    /// Read activity entries, newest first
    async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<ActivityEntry>>;
}
