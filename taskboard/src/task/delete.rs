//! DeleteTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Remove a task from whichever list holds it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    pub board: BoardId,
    pub id: TaskId,
}

impl_operation!(DeleteTask, verb = "delete", noun = "task", description = "Delete a task");

impl DeleteTask {
    pub fn new(board: impl Into<BoardId>, id: impl Into<TaskId>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for DeleteTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let mut deleted = false;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let Some(list) = board.list_of_task(&self.id) else {
                return Ok(state.clone());
            };
            deleted = true;
            let list = list.without_task(&self.id);
            Ok(state.with_board_replaced(&board.with_list_replaced(&list)))
        })
        .await?;

        Ok(json!({ "id": self.id, "deleted": deleted }))
    }
}
