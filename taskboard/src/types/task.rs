//! Task: a unit of work inside a list

use super::ids::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Free text; serialized as `null` when absent
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Copy of this task with new content and a fresh `updated_at`
    pub fn edited(&self, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into(),
            description,
            created_at: self.created_at,
            updated_at: Some(Utc::now()),
        }
    }

    /// Case-insensitive substring match on title and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Write docs");
        assert_eq!(task.title, "Write docs");
        assert!(task.description.is_none());
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn test_edited_keeps_identity() {
        let task = Task::new("Write docs").with_description(Some("draft".into()));
        let edited = task.edited("Write more docs", None);
        assert_eq!(edited.id, task.id);
        assert_eq!(edited.created_at, task.created_at);
        assert_eq!(edited.title, "Write more docs");
        assert!(edited.description.is_none());
        assert!(edited.updated_at.is_some());
        // original untouched
        assert_eq!(task.title, "Write docs");
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::new("Ship it");
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value["description"].is_null());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_reads_browser_shaped_task() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Buy milk",
            "description": null,
            "createdAt": "2024-01-05T10:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "1700000000000");
        assert!(task.description.is_none());
    }

    #[test]
    fn test_matches_description_only() {
        let task = Task::new("Groceries").with_description(Some("Buy OAT milk".into()));
        assert!(task.matches_lowercase("oat"));
        assert!(task.matches_lowercase("groc"));
        assert!(!task.matches_lowercase("bread"));
    }
}
