//! RenameBoard command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{Board, BoardId};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rename a board. Returns null when the board does not exist.
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameBoard {
    pub id: BoardId,
    /// The new name (at least 3 characters)
    pub name: String,
}

impl_operation!(
    RenameBoard,
    verb = "rename",
    noun = "board",
    description = "Rename a board"
);

impl RenameBoard {
    pub fn new(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for RenameBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let name = validate::board_name(&self.name)?;
        let mut renamed: Option<Board> = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.id) else {
                return Ok(state.clone());
            };
            let next = board.renamed(name);
            let state = state.with_board_replaced(&next);
            renamed = Some(next);
            Ok(state)
        })
        .await?;

        match renamed {
            Some(board) => Ok(serde_json::to_value(&board)?),
            None => {
                tracing::debug!(board = %self.id, "rename skipped: no such board");
                Ok(Value::Null)
            }
        }
    }
}
