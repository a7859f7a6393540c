//! Task commands

mod add;
mod delete;
mod drag;
mod get;
mod mv;
mod reorder;
mod search;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use drag::{DropTask, NudgeTask};
pub use get::GetTask;
pub use mv::MoveTask;
pub use reorder::ReorderTask;
pub use search::SearchTasks;
pub use update::UpdateTask;
