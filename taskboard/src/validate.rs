//! Form validation for user-entered names and titles
//!
//! Every rule trims its input first and returns the trimmed text on success, so
//! callers store exactly what was validated.

use crate::error::{Result, TaskboardError};

/// Shortest accepted name or title, counted in characters after trimming
pub const MIN_NAME_LEN: usize = 3;

fn required_text(field: &str, label: &str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TaskboardError::validation(
            field,
            format!("{label} is required"),
        ));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(TaskboardError::validation(
            field,
            format!("{label} must be at least {MIN_NAME_LEN} characters long"),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn board_name(input: &str) -> Result<String> {
    required_text("name", "Board name", input)
}

pub fn list_name(input: &str) -> Result<String> {
    required_text("name", "List name", input)
}

pub fn task_title(input: &str) -> Result<String> {
    required_text("title", "Task title", input)
}

/// Optional text: trimmed, and blank becomes `None`
pub fn task_description(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
