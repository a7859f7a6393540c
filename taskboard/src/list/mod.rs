//! List commands

mod add;
mod delete;
mod rename;

pub use add::AddList;
pub use delete::DeleteList;
pub use rename::RenameList;
