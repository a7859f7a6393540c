//! ListBoards command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List dashboard summaries for every board, in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards {}

impl_operation!(
    ListBoards,
    verb = "list",
    noun = "boards",
    description = "List boards with list, task and completed counts",
    mutates = false
);

impl ListBoards {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ListBoards {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let state = ctx.state().await;
        Ok(serde_json::json!({
            "boards": state.summaries(),
            "count": state.boards.len(),
        }))
    }
}
