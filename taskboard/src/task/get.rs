//! GetTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a task and the id of the list holding it
#[derive(Debug, Deserialize, Serialize)]
pub struct GetTask {
    pub board: BoardId,
    pub id: TaskId,
}

impl_operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Get a task by id",
    mutates = false
);

impl GetTask {
    pub fn new(board: impl Into<BoardId>, id: impl Into<TaskId>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for GetTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let board = ctx.board(&self.board).await?;
        let list = board
            .list_of_task(&self.id)
            .ok_or_else(|| TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            })?;
        let task = list.find_task(&self.id).ok_or_else(|| TaskboardError::TaskNotFound {
            id: self.id.to_string(),
        })?;

        let mut result = serde_json::to_value(task)?;
        result["list"] = serde_json::to_value(&list.id)?;
        Ok(result)
    }
}
