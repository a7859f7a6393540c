//! Error types for the taskboard engine

use thiserror::Error;

/// Result type for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

/// Errors that can occur in taskboard operations
#[derive(Debug, Error)]
pub enum TaskboardError {
    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Duplicate ID inside a collection that requires unique identity
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// User input rejected by form validation
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Backup document could not be applied
    #[error("invalid backup file: {message}")]
    InvalidBackup { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskboardError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create an invalid backup error
    pub fn invalid_backup(message: impl Into<String>) -> Self {
        Self::InvalidBackup {
            message: message.into(),
        }
    }

    /// True for errors caused by user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidBackup { .. } | Self::DuplicateId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskboardError::TaskNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "task not found: abc123");
    }

    #[test]
    fn test_validation_shows_message_only() {
        let err = TaskboardError::validation("name", "Board name is required");
        assert_eq!(err.to_string(), "Board name is required");
    }

    #[test]
    fn test_user_error() {
        assert!(TaskboardError::invalid_backup("bad").is_user_error());
        assert!(TaskboardError::duplicate_id("task", "t1").is_user_error());
        assert!(!TaskboardError::BoardNotFound { id: "x".into() }.is_user_error());
    }
}
