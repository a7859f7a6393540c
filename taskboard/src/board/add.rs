//! AddBoard command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::Board;
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create a new board with the default lists
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoard {
    /// The board name (at least 3 characters)
    pub name: String,
}

impl_operation!(
    AddBoard,
    verb = "add",
    noun = "board",
    description = "Create a board with To Do, In Progress and Done lists"
);

impl AddBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for AddBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let name = validate::board_name(&self.name)?;
        let board = Board::new(name);

        ctx.update(|state| Ok(state.with_board_added(board.clone())))
            .await?;

        tracing::info!(board = %board.id, name = %board.name, "board created");
        Ok(serde_json::to_value(&board)?)
    }
}
