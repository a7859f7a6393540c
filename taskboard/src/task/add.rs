//! AddTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, ListId, Task};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Append a new task to a list. Returns null when board or list is missing.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    pub board: BoardId,
    pub list: ListId,
    /// The task title (at least 3 characters)
    pub title: String,
    /// Optional details; blank is treated as absent
    pub description: Option<String>,
}

impl_operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Add a task to the end of a list"
);

impl AddTask {
    pub fn new(board: impl Into<BoardId>, list: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            list: list.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for AddTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let title = validate::task_title(&self.title)?;
        let task = Task::new(title)
            .with_description(validate::task_description(self.description.as_deref()));
        let mut added = false;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let Some(list) = board.find_list(&self.list) else {
                return Ok(state.clone());
            };
            added = true;
            let list = list.with_task_added(task.clone());
            Ok(state.with_board_replaced(&board.with_list_replaced(&list)))
        })
        .await?;

        if !added {
            tracing::debug!(board = %self.board, list = %self.list, "add task skipped: no such list");
            return Ok(Value::Null);
        }
        Ok(serde_json::to_value(&task)?)
    }
}
