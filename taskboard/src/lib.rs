//! Task board engine: boards, lists and tasks with persistent state
//!
//! All state lives in one immutable tree ([`AppState`]): an ordered list of
//! boards plus the dark-mode flag. Commands are plain structs that compute a
//! replacement tree and commit it through [`TaskboardContext::update`], which
//! persists only the keys that changed.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{board::AddBoard, task::AddTask, Execute, FileStorage, TaskboardContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = TaskboardContext::open(FileStorage::new("/tmp/taskboard")).await?;
//! let board = AddBoard::new("My Project").execute(&ctx).await?;
//! let board_id = board["id"].as_str().unwrap_or_default();
//!
//! let task = AddTask::new(board_id, "todo", "Implement feature X")
//!     .with_description("Add the new feature")
//!     .execute(&ctx)
//!     .await?;
//!
//! println!("Created task: {}", task["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! data_dir/
//! ├── boards.json      # every board, in dashboard order
//! ├── dark-mode.json   # true / false
//! └── activity.jsonl   # one entry per mutating command
//! ```
//!
//! Running commands through [`TaskboardProcessor`] records each mutating
//! command in the activity log.

mod context;
pub mod dnd;
mod error;
pub mod operation;
mod processor;
pub mod search;
pub mod storage;
pub mod transfer;
pub mod types;
pub mod validate;

// Command modules
pub mod activity;
pub mod backup;
pub mod board;
pub mod list;
pub mod task;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use operation::{async_trait, Execute, Operation};

pub use context::TaskboardContext;
pub use error::{Result, TaskboardError};
pub use processor::TaskboardProcessor;
pub use storage::{FileStorage, MemoryStorage, Storage};

pub use types::{
    ActivityEntry, ActivityId, AppState, Board, BoardId, BoardSummary, List, ListId, Task,
    TaskId, View,
};
