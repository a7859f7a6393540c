//! RenameList command

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use crate::types::{BoardId, List, ListId};
use crate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rename a list, keeping its tasks. Returns null when board or list is missing.
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameList {
    pub board: BoardId,
    pub id: ListId,
    /// The new name (at least 3 characters)
    pub name: String,
}

impl_operation!(
    RenameList,
    verb = "rename",
    noun = "list",
    description = "Rename a list"
);

impl RenameList {
    pub fn new(board: impl Into<BoardId>, id: impl Into<ListId>, name: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            id: id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for RenameList {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let name = validate::list_name(&self.name)?;
        let mut renamed: Option<List> = None;

        ctx.update(|state| {
            let Some(board) = state.find_board(&self.board) else {
                return Ok(state.clone());
            };
            let Some(list) = board.find_list(&self.id) else {
                return Ok(state.clone());
            };
            let list = list.renamed(name);
            let next = state.with_board_replaced(&board.with_list_replaced(&list));
            renamed = Some(list);
            Ok(next)
        })
        .await?;

        match renamed {
            Some(list) => Ok(serde_json::to_value(&list)?),
            None => {
                tracing::debug!(board = %self.board, list = %self.id, "rename skipped: no such list");
                Ok(Value::Null)
            }
        }
    }
}
