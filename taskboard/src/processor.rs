//! Runs commands and records what mutating commands did

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::Execute;
use crate::types::ActivityEntry;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Executes operations, timing them and appending mutating ones to the activity log
#[derive(Debug, Clone, Default)]
pub struct TaskboardProcessor {
    actor: Option<String>,
}

impl TaskboardProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute recorded activity to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute `op` and, when it mutates, record the outcome.
    ///
    /// A failure to write the activity log is logged and does not fail the operation.
    pub async fn process<O>(&self, op: &O, ctx: &TaskboardContext) -> Result<Value>
    where
        O: Execute<TaskboardContext, TaskboardError> + Serialize,
    {
        let op_string = op.op_string();
        let start = Instant::now();
        let result = op.execute(ctx).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::debug!(op = %op_string, duration_ms, "operation succeeded"),
            Err(e) => tracing::debug!(op = %op_string, duration_ms, error = %e, "operation failed"),
        }

        if op.mutates() {
            let input = serde_json::to_value(op)?;
            let entry = match &result {
                Ok(value) => ActivityEntry::new(
                    op_string.as_str(),
                    input,
                    value.clone(),
                    self.actor.clone(),
                    duration_ms,
                ),
                Err(e) => {
                    let entry =
                        ActivityEntry::failure(op_string.as_str(), input, &e.to_string(), duration_ms);
                    match &self.actor {
                        Some(actor) => entry.with_actor(actor),
                        None => entry,
                    }
                }
            };
            if let Err(e) = ctx.storage().append_activity(&entry).await {
                tracing::warn!(op = %op_string, error = %e, "failed to record activity");
            }
        }

        result
    }
}
