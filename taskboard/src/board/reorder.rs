//! ReorderBoards command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Move a dashboard card: board `active` takes the position of board `over`
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderBoards {
    /// The dragged board
    pub active: BoardId,
    /// The board it was dropped on
    pub over: BoardId,
}

impl_operation!(
    ReorderBoards,
    verb = "reorder",
    noun = "boards",
    description = "Move a board to the position of another board"
);

impl ReorderBoards {
    pub fn new(active: impl Into<BoardId>, over: impl Into<BoardId>) -> Self {
        Self {
            active: active.into(),
            over: over.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ReorderBoards {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let state = ctx
            .update(|state| Ok(state.with_boards_reordered(&self.active, &self.over)))
            .await?;
        Ok(serde_json::json!({ "boards": state.summaries() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;

    async fn three_boards(ctx: &TaskboardContext) -> Vec<String> {
        let mut ids = Vec::new();
        for name in ["First", "Second", "Third"] {
            let added = AddBoard::new(name).execute(ctx).await.unwrap();
            ids.push(added["id"].as_str().unwrap().to_string());
        }
        ids
    }

    async fn names(ctx: &TaskboardContext) -> Vec<String> {
        ctx.state().await.boards.into_iter().map(|b| b.name).collect()
    }

    #[tokio::test]
    async fn test_reorder_boards_forward() {
        let ctx = TaskboardContext::in_memory();
        let ids = three_boards(&ctx).await;

        let result = ReorderBoards::new(ids[0].as_str(), ids[2].as_str())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(names(&ctx).await, vec!["Second", "Third", "First"]);
        assert_eq!(result["boards"][2]["name"], "First");
    }

    #[tokio::test]
    async fn test_reorder_boards_backward() {
        let ctx = TaskboardContext::in_memory();
        let ids = three_boards(&ctx).await;

        ReorderBoards::new(ids[2].as_str(), ids[0].as_str())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(names(&ctx).await, vec!["Third", "First", "Second"]);
    }

    #[tokio::test]
    async fn test_reorder_onto_itself_is_noop() {
        let ctx = TaskboardContext::in_memory();
        let ids = three_boards(&ctx).await;

        ReorderBoards::new(ids[1].as_str(), ids[1].as_str())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(names(&ctx).await, vec!["First", "Second", "Third"]);
    }
}
