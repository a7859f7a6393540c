//! Gesture commands: pointer drops and keyboard nudges

use crate::context::TaskboardContext;
use crate::dnd::{resolve_drop, resolve_key, DragEnd, DragIntent, KeyDirection};
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{AppState, Board, BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Finish a pointer drag of a task.
///
/// `over` is whatever the task was released on: a list id, a task id, or
/// nothing. Returns the resolved intent (null if the drop did nothing) and the
/// resulting board.
#[derive(Debug, Deserialize, Serialize)]
pub struct DropTask {
    pub board: BoardId,
    pub active: String,
    #[serde(default)]
    pub over: Option<String>,
}

impl_operation!(
    DropTask,
    verb = "drop",
    noun = "task",
    description = "Drop a dragged task on a list or another task"
);

impl DropTask {
    pub fn new(board: impl Into<BoardId>, active: impl Into<String>, over: Option<String>) -> Self {
        Self {
            board: board.into(),
            active: active.into(),
            over,
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for DropTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let released = DragEnd::new(self.active.as_str(), self.over.clone());
        apply_gesture(ctx, &self.board, |board| resolve_drop(board, &released)).await
    }
}

/// Move a task one step with the keyboard
#[derive(Debug, Deserialize, Serialize)]
pub struct NudgeTask {
    pub board: BoardId,
    pub id: TaskId,
    pub direction: KeyDirection,
}

impl_operation!(
    NudgeTask,
    verb = "nudge",
    noun = "task",
    description = "Move a task up, down, left or right"
);

impl NudgeTask {
    pub fn new(board: impl Into<BoardId>, id: impl Into<TaskId>, direction: KeyDirection) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
            direction,
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for NudgeTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        apply_gesture(ctx, &self.board, |board| {
            resolve_key(board, &self.id, self.direction)
        })
        .await
    }
}

async fn apply_gesture<F>(ctx: &TaskboardContext, board_id: &BoardId, resolve: F) -> Result<Value>
where
    F: FnOnce(&Board) -> Option<DragIntent>,
{
    let mut outcome: Option<(Option<DragIntent>, Board)> = None;

    ctx.update(|state: &AppState| {
        let Some(board) = state.find_board(board_id) else {
            return Ok(state.clone());
        };
        let intent = resolve(board);
        let next = match &intent {
            Some(intent) => intent.apply(board),
            None => board.clone(),
        };
        let state = state.with_board_replaced(&next);
        outcome = Some((intent, next));
        Ok(state)
    })
    .await?;

    match outcome {
        Some((intent, board)) => {
            if intent.is_none() {
                tracing::debug!(board = %board_id, "gesture resolved to nothing");
            }
            Ok(json!({ "intent": intent, "board": board }))
        }
        None => Ok(Value::Null),
    }
}
