//! Theme commands

use crate::context::TaskboardContext;
use crate::error::{Result, TaskboardError};
use crate::operation::{async_trait, impl_operation, Execute};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn theme_value(dark_mode: bool) -> Value {
    json!({ "darkMode": dark_mode })
}

/// Report whether dark mode is on
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetTheme {}

impl_operation!(
    GetTheme,
    verb = "get",
    noun = "theme",
    description = "Show the color scheme",
    mutates = false
);

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for GetTheme {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        Ok(theme_value(ctx.state().await.dark_mode))
    }
}

/// Turn dark mode on or off
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDarkMode {
    pub dark_mode: bool,
}

impl_operation!(
    SetDarkMode,
    verb = "set",
    noun = "theme",
    description = "Choose the light or dark color scheme"
);

impl SetDarkMode {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }
}

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for SetDarkMode {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let state = ctx
            .update(|state| Ok(state.with_dark_mode(self.dark_mode)))
            .await?;
        Ok(theme_value(state.dark_mode))
    }
}

/// Flip the color scheme
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ToggleDarkMode {}

impl_operation!(
    ToggleDarkMode,
    verb = "toggle",
    noun = "theme",
    description = "Switch between light and dark color schemes"
);

#[async_trait]
impl Execute<TaskboardContext, TaskboardError> for ToggleDarkMode {
    async fn execute(&self, ctx: &TaskboardContext) -> Result<Value> {
        let state = ctx
            .update(|state| Ok(state.with_dark_mode(!state.dark_mode)))
            .await?;
        tracing::info!(dark_mode = state.dark_mode, "theme toggled");
        Ok(theme_value(state.dark_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_toggle_twice_restores() {
        let ctx = TaskboardContext::in_memory();

        let first = ToggleDarkMode::default().execute(&ctx).await.unwrap();
        assert_eq!(first["darkMode"], true);
        let second = ToggleDarkMode::default().execute(&ctx).await.unwrap();
        assert_eq!(second["darkMode"], false);

        let current = GetTheme::default().execute(&ctx).await.unwrap();
        assert_eq!(current["darkMode"], false);
    }

    #[tokio::test]
    async fn test_theme_is_persisted_without_boards() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = TaskboardContext::open_shared(storage.clone()).await.unwrap();

        SetDarkMode::new(true).execute(&ctx).await.unwrap();

        assert!(storage.saved_state().dark_mode);
        assert_eq!(storage.theme_saves(), 1);
        assert_eq!(storage.board_saves(), 0);
    }

    #[tokio::test]
    async fn test_set_same_value_writes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = TaskboardContext::open_shared(storage.clone()).await.unwrap();

        let result = SetDarkMode::new(false).execute(&ctx).await.unwrap();

        assert_eq!(result["darkMode"], false);
        assert_eq!(storage.theme_saves(), 0);
    }
}
