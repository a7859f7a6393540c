//! OpenBoard and CloseBoard commands

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Switch the view to a board
#[derive(Debug, Deserialize, Serialize)]
pub struct OpenBoard {
    pub id: BoardId,
}

impl_operation!(
    OpenBoard,
    verb = "open",
    noun = "board",
    description = "Show a board instead of the dashboard",
    mutates = false
);

impl OpenBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for OpenBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let board = ctx.board(&self.id).await?;
        ctx.set_view(View::Board(board.id.clone())).await;
        Ok(serde_json::to_value(&board)?)
    }
}

/// Return to the dashboard
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CloseBoard {}

impl_operation!(
    CloseBoard,
    verb = "close",
    noun = "board",
    description = "Return to the dashboard",
    mutates = false
);

impl CloseBoard {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for CloseBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        ctx.set_view(View::Dashboard).await;
        Ok(serde_json::to_value(View::Dashboard)?)
    }
}
