//! GetBoard command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a board with all its lists and tasks
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoard {
    pub id: BoardId,
}

impl_operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get a board with its lists and tasks",
    mutates = false
);

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for GetBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let board = ctx.board(&self.id).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
