//! SearchTasks command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::search::filter_board;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Show a board with only the tasks matching `query`
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchTasks {
    pub board: BoardId,
    pub query: String,
}

impl_operation!(
    SearchTasks,
    verb = "search",
    noun = "task",
    description = "Filter a board's tasks by title or description",
    mutates = false
);

impl SearchTasks {
    pub fn new(board: impl Into<BoardId>, query: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            query: query.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for SearchTasks {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let board = ctx.board(&self.board).await?;
        Ok(serde_json::to_value(filter_board(&board, &self.query))?)
    }
}
