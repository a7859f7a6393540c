//! MoveTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{Board, BoardId, ListId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Move a task to the end of another list.
///
/// Moving onto the list it is already in, or naming an unknown task or list,
/// leaves the board as it was and reports `moved: false`.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    pub board: BoardId,
    pub id: TaskId,
    /// Destination list
    pub to: ListId,
}

impl_operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to the end of another list"
);

impl MoveTask {
    pub fn new(board: impl Into<BoardId>, id: impl Into<TaskId>, to: impl Into<ListId>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
            to: to.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for MoveTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let mut outcome: Option<(bool, Board)> = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let next = board.with_task_moved(&self.id, &self.to);
            let moved = &next != board;
            let state = state.with_board_replaced(&next);
            outcome = Some((moved, next));
            Ok(state)
        })
        .await?;

        match outcome {
            Some((moved, board)) => Ok(json!({ "moved": moved, "board": board })),
            None => Ok(Value::Null),
        }
    }
}
