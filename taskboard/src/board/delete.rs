//! DeleteBoard command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delete a board with all its lists and tasks.
///
/// If the board was open, the view returns to the dashboard.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    pub id: BoardId,
}

impl_operation!(
    DeleteBoard,
    verb = "delete",
    noun = "board",
    description = "Delete a board and everything on it"
);

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for DeleteBoard {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let mut deleted = false;

        ctx.update(|state| {
            deleted = state.find_board(&self.id).is_some();
            Ok(state.without_board(&self.id))
        })
        .await?;

        if !deleted {
            tracing::debug!(board = %self.id, "delete skipped: no such board");
        }

        Ok(serde_json::json!({
            "id": self.id,
            "deleted": deleted,
            "view": ctx.view().await,
        }))
    }
}
