//! UpdateTask command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, Task, TaskId};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Edit a task's title and/or description.
///
/// Omitted fields keep their value; a blank description clears it. Every edit
/// stamps `updatedAt`. Returns null when the board or task does not exist.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    pub board: BoardId,
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Edit a task's title or description"
);

impl UpdateTask {
    pub fn new(board: impl Into<BoardId>, id: impl Into<TaskId>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for UpdateTask {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let title = self.title.as_deref().map(validate::task_title).transpose()?;
        let mut edited: Option<Task> = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let Some(list) = board.list_of_task(&self.id) else {
                return Ok(state.clone());
            };
            let Some(task) = list.find_task(&self.id) else {
                return Ok(state.clone());
            };

            let description = match &self.description {
                Some(text) => validate::task_description(Some(text.as_str())),
                None => task.description.clone(),
            };
            let next = task.edited(title.clone().unwrap_or_else(|| task.title.clone()), description);
            let list = list.with_task_replaced(&next);
            edited = Some(next);
            Ok(state.with_board_replaced(&board.with_list_replaced(&list)))
        })
        .await?;

        match edited {
            Some(task) => Ok(serde_json::to_value(&task)?),
            None => {
                tracing::debug!(board = %self.board, task = %self.id, "update skipped: no such task");
                Ok(Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{AddTask, GetTask};
    use crate::test_support::board_with_tasks;

    #[tokio::test]
    async fn test_update_title_keeps_description() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Home", &[]).await;
        let added = AddTask::new(board.clone(), "todo", "Paint")
            .with_description("white")
            .execute(&ctx)
            .await
            .unwrap();
        let id = added["id"].as_str().unwrap();

        let result = UpdateTask::new(board.clone(), id)
            .with_title("Paint the shed")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Paint the shed");
        assert_eq!(result["description"], "white");
        assert_eq!(result["createdAt"], added["createdAt"]);
        assert!(result["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_blank_description_clears() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Home", &[]).await;
        let added = AddTask::new(board.clone(), "todo", "Paint")
            .with_description("white")
            .execute(&ctx)
            .await
            .unwrap();
        let id = added["id"].as_str().unwrap();

        UpdateTask::new(board.clone(), id)
            .with_description("  ")
            .execute(&ctx)
            .await
            .unwrap();

        let task = GetTask::new(board, id).execute(&ctx).await.unwrap();
        assert!(task["description"].is_null());
        assert_eq!(task["title"], "Paint");
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let ctx = TaskboardContext::in_memory();
        let (board, tasks) = board_with_tasks(&ctx, "Home", &["one", "two", "three"]).await;

        UpdateTask::new(board.clone(), tasks[1].clone())
            .with_title("TWO")
            .execute(&ctx)
            .await
            .unwrap();

        let board = ctx.board(&board).await.unwrap();
        let titles: Vec<_> = board.lists[0].tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "TWO", "three"]);
    }

    #[tokio::test]
    async fn test_update_invalid_title() {
        let ctx = TaskboardContext::in_memory();
        let (board, tasks) = board_with_tasks(&ctx, "Home", &["one"]).await;

        let err = UpdateTask::new(board, tasks[0].clone())
            .with_title("ab")
            .execute(&ctx)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Task title must be at least 3 characters long");
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Home", &[]).await;
        let result = UpdateTask::new(board, "ghost")
            .with_title("whatever")
            .execute(&ctx)
            .await
            .unwrap();
        assert!(result.is_null());
    }
}
