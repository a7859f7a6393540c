//! ExportState command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::transfer::ExportDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot every board and the theme as a backup document
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportState {}

impl_operation!(
    ExportState,
    verb = "export",
    noun = "state",
    description = "Export all boards and settings as a backup document",
    mutates = false
);

impl ExportState {
    /// The backup document itself, for callers that write it to a file
    pub async fn document(&self, ctx: &TaskboardContext) -> ExportDocument {
        ExportDocument::from_state(&ctx.state().await)
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ExportState {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let doc = self.document(ctx).await;
        tracing::debug!(boards = doc.boards.len(), file = %doc.file_name(), "exported state");
        Ok(serde_json::to_value(&doc)?)
    }
}
