//! DeleteList command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delete a list together with its tasks
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteList {
    pub board: BoardId,
    pub id: ListId,
}

impl_operation!(
    DeleteList,
    verb = "delete",
    noun = "list",
    description = "Delete a list and its tasks"
);

impl DeleteList {
    pub fn new(board: impl Into<BoardId>, id: impl Into<ListId>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for DeleteList {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let mut removed_tasks = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let Some(list) = board.find_list(&self.id) else {
                return Ok(state.clone());
            };
            removed_tasks = Some(list.tasks.len());
            Ok(state.with_board_replaced(&board.without_list(&self.id)))
        })
        .await?;

        Ok(serde_json::json!({
            "id": self.id,
            "deleted": removed_tasks.is_some(),
            "tasksRemoved": removed_tasks.unwrap_or(0),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board_with_tasks;

    #[tokio::test]
    async fn test_delete_list_with_tasks() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Home", &["dishes", "laundry"]).await;

        let result = DeleteList::new(board.clone(), "todo").execute(&ctx).await.unwrap();

        assert_eq!(result["deleted"], true);
        assert_eq!(result["tasksRemoved"], 2);
        let board = ctx.board(&board).await.unwrap();
        assert_eq!(board.lists.len(), 2);
        assert_eq!(board.task_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_list_is_noop() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Home", &[]).await;

        let result = DeleteList::new(board.clone(), "ghost").execute(&ctx).await.unwrap();

        assert_eq!(result["deleted"], false);
        assert_eq!(ctx.board(&board).await.unwrap().lists.len(), 3);
    }
}
