//! Activity log commands

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// List recorded activity, newest first
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListActivity {
    /// Maximum number of entries to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl_operation!(
    ListActivity,
    verb = "list",
    noun = "activity",
    description = "List recent changes, newest first",
    mutates = false
);

impl ListActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ListActivity {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let entries = ctx.storage().read_activity(self.limit).await?;
        Ok(json!({
            "count": entries.len(),
            "entries": entries,
        }))
    }
}
