//! ReorderTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, List, ListId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Reinsert `active` at the index of `over` within one list
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderTask {
    pub board: BoardId,
    pub list: ListId,
    pub active: TaskId,
    pub over: TaskId,
}

impl_operation!(
    ReorderTask,
    verb = "reorder",
    noun = "task",
    description = "Reorder a task within its list"
);

impl ReorderTask {
    pub fn new(
        board: impl Into<BoardId>,
        list: impl Into<ListId>,
        active: impl Into<TaskId>,
        over: impl Into<TaskId>,
    ) -> Self {
        Self {
            board: board.into(),
            list: list.into(),
            active: active.into(),
            over: over.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ReorderTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let mut outcome: Option<(bool, List)> = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let next = board.with_task_reordered(&self.list, &self.active, &self.over);
            let Some(list) = next.find_list(&self.list).cloned() else {
                return Ok(state.clone());
            };
            outcome = Some((&next != board, list));
            Ok(state.with_board_replaced(&next))
        })
        .await?;

        match outcome {
            Some((reordered, list)) => Ok(json!({ "reordered": reordered, "list": list })),
            None => Ok(Value::Null),
        }
    }
}
