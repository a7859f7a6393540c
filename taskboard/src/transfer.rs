//! Backup documents: whole-state export and tolerant import

use crate::error::{Result, TaskboardError};
use crate::types::{AppState, Board};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a backup file contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub boards: Vec<Board>,
    pub dark_mode: bool,
    pub export_date: DateTime<Utc>,
}

impl ExportDocument {
    /// Snapshot `state`, stamped now
    pub fn from_state(state: &AppState) -> Self {
        Self {
            boards: state.boards.clone(),
            dark_mode: state.dark_mode,
            export_date: Utc::now(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default file name for this export, e.g. `task-manager-backup-2024-05-01.json`
    pub fn file_name(&self) -> String {
        backup_file_name(self.export_date)
    }
}

/// The keys an import found. Absent keys leave the matching state alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDocument {
    pub boards: Option<Vec<Board>>,
    pub dark_mode: Option<bool>,
}

impl ImportDocument {
    /// `state` with every present key applied
    pub fn apply_to(&self, state: &AppState) -> AppState {
        AppState {
            boards: self.boards.clone().unwrap_or_else(|| state.boards.clone()),
            dark_mode: self.dark_mode.unwrap_or(state.dark_mode),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_none() && self.dark_mode.is_none()
    }
}

/// Parse backup text.
///
/// The text must be a JSON object. `boards` and `darkMode` are read when present
/// and not null; other keys are ignored. Any problem, including duplicate ids in
/// the boards, yields [`TaskboardError::InvalidBackup`].
pub fn parse_import(text: &str) -> Result<ImportDocument> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| TaskboardError::invalid_backup(e.to_string()))?;
    let Value::Object(mut map) = value else {
        return Err(TaskboardError::invalid_backup("expected a JSON object"));
    };

    let boards = match map.remove("boards") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let boards: Vec<Board> = serde_json::from_value(raw)
                .map_err(|e| TaskboardError::invalid_backup(format!("boards: {e}")))?;
            AppState::new(boards.clone(), false)
                .validate()
                .map_err(|e| TaskboardError::invalid_backup(e.to_string()))?;
            Some(boards)
        }
    };

    let dark_mode = match map.remove("darkMode") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            serde_json::from_value(raw)
                .map_err(|e| TaskboardError::invalid_backup(format!("darkMode: {e}")))?,
        ),
    };

    Ok(ImportDocument { boards, dark_mode })
}

/// `task-manager-backup-YYYY-MM-DD.json` for the given instant
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    format!("task-manager-backup-{}.json", at.format("%Y-%m-%d"))
}
