//! Board commands

mod add;
mod delete;
mod get;
mod list;
mod open;
mod rename;
mod reorder;

pub use add::AddBoard;
pub use delete::DeleteBoard;
pub use get::GetBoard;
pub use list::ListBoards;
pub use open::{CloseBoard, OpenBoard};
pub use rename::RenameBoard;
pub use reorder::ReorderBoards;
