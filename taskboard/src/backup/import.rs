//! ImportState command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::transfer::parse_import;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Restore state from backup text.
///
/// Keys present in the document replace the matching state; absent keys are
/// left alone. A document that cannot be read changes nothing.
#[derive(Debug, Deserialize, Serialize)]
pub struct ImportState {
    /// Raw backup text; kept out of the activity log
    #[serde(skip_serializing, default)]
    pub content: String,
}

impl_operation!(
    ImportState,
    verb = "import",
    noun = "state",
    description = "Restore boards and settings from a backup document"
);

impl ImportState {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ImportState {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let doc = parse_import(&self.content).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected backup");
        })?;
        if doc.is_empty() {
            tracing::warn!("backup has neither boards nor darkMode; nothing imported");
        }

        let state = ctx.update(|state| Ok(doc.apply_to(state))).await?;

        Ok(json!({
            "boards": state.boards.len(),
            "darkMode": state.dark_mode,
            "replacedBoards": doc.boards.is_some(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::ExportState;
    use crate::test_support::board_with_tasks;
    use crate::theme::SetDarkMode;
    use crate::types::View;

    #[tokio::test]
    async fn test_round_trip_through_export() {
        let source = TaskboardContext::in_memory();
        board_with_tasks(&source, "Alpha", &["one"]).await;
        board_with_tasks(&source, "Beta", &["two", "three"]).await;
        SetDarkMode::new(true).execute(&source).await.unwrap();
        let text = ExportState::default()
            .document(&source)
            .await
            .to_json_pretty()
            .unwrap();

        let target = TaskboardContext::in_memory();
        let result = ImportState::new(text).execute(&target).await.unwrap();

        assert_eq!(result["boards"], 2);
        assert_eq!(result["darkMode"], true);
        assert_eq!(target.state().await, source.state().await);
    }

    #[tokio::test]
    async fn test_import_only_theme_keeps_boards() {
        let ctx = TaskboardContext::in_memory();
        board_with_tasks(&ctx, "Keep me", &[]).await;

        ImportState::new(r#"{"darkMode": true}"#).execute(&ctx).await.unwrap();

        let state = ctx.state().await;
        assert_eq!(state.boards.len(), 1);
        assert!(state.dark_mode);
    }

    #[tokio::test]
    async fn test_malformed_backup_changes_nothing() {
        let ctx = TaskboardContext::in_memory();
        board_with_tasks(&ctx, "Keep me", &["task"]).await;
        let before = ctx.state().await;

        let result = ImportState::new("not json at all").execute(&ctx).await;

        assert!(matches!(result, Err(TaskboardError::InvalidBackup { .. })));
        assert_eq!(ctx.state().await, before);
    }

    #[tokio::test]
    async fn test_import_closes_vanished_board() {
        let ctx = TaskboardContext::in_memory();
        let (board, _) = board_with_tasks(&ctx, "Old", &[]).await;
        ctx.set_view(View::Board(board)).await;

        ImportState::new(r#"{"boards": []}"#).execute(&ctx).await.unwrap();

        assert_eq!(ctx.view().await, View::Dashboard);
        assert!(ctx.state().await.boards.is_empty());
    }

    #[test]
    fn test_content_not_serialized() {
        let value = serde_json::to_value(ImportState::new("{\"boards\": []}")).unwrap();
        assert!(value.get("content").is_none());
    }
}
