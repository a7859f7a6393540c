//! AddList command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, List};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Append an empty list to a board. Returns null when the board does not exist.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddList {
    pub board: BoardId,
    /// The list name (at least 3 characters)
    pub name: String,
}

impl_operation!(
    AddList,
    verb = "add",
    noun = "list",
    description = "Add a list to the end of a board"
);

impl AddList {
    pub fn new(board: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for AddList {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let list = List::new(validate::list_name(&self.name)?);
        let mut added = false;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            added = true;
            Ok(state.with_board_replaced(&board.with_list_added(list.clone())))
        })
        .await?;

        if !added {
            tracing::debug!(board = %self.board, "add list skipped: no such board");
            return Ok(Value::Null);
        }
        Ok(serde_json::to_value(&list)?)
    }
}
