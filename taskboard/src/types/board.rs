//! Board-level types: Board and its dashboard summary

use super::ids::{BoardId, ListId, TaskId};
use super::list::List;
use super::task::Task;
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name of the list whose tasks count as completed on the dashboard
pub const DONE_LIST_NAME: &str = "Done";

/// A kanban board: a named, ordered collection of lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// Create a new board with the default lists
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            lists: Self::default_lists(),
        }
    }

    /// Build a board from existing parts, rejecting duplicate list or task ids
    pub fn from_parts(id: BoardId, name: impl Into<String>, lists: Vec<List>) -> Result<Self> {
        let board = Self {
            id,
            name: name.into(),
            lists,
        };
        board.validate()?;
        Ok(board)
    }

    /// The lists every new board starts with
    pub fn default_lists() -> Vec<List> {
        vec![
            List::with_id("todo", "To Do"),
            List::with_id("in-progress", "In Progress"),
            List::with_id(ListId::from_string("done"), DONE_LIST_NAME),
        ]
    }

    /// Check identity uniqueness: list ids within the board, task ids across the board
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(TaskboardError::duplicate_id("list", list.id.as_str()));
            }
            for task in &list.tasks {
                if !task_ids.insert(&task.id) {
                    return Err(TaskboardError::duplicate_id("task", task.id.as_str()));
                }
            }
        }
        Ok(())
    }

    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// The list currently holding a task
    pub fn list_of_task(&self, id: &TaskId) -> Option<&List> {
        self.lists.iter().find(|l| l.contains_task(id))
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.lists.iter().find_map(|l| l.find_task(id))
    }

    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|l| l.tasks.len()).sum()
    }

    /// Tasks sitting in the first list named "Done"
    pub fn completed_count(&self) -> usize {
        self.lists
            .iter()
            .find(|l| l.name == DONE_LIST_NAME)
            .map(|l| l.tasks.len())
            .unwrap_or(0)
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            lists: self.lists.len(),
            tasks: self.task_count(),
            completed: self.completed_count(),
        }
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with `list` appended
    pub fn with_list_added(&self, list: List) -> Self {
        let mut lists = self.lists.clone();
        lists.push(list);
        Self {
            lists,
            ..self.clone()
        }
    }

    /// Copy with the list sharing `list.id` replaced
    pub fn with_list_replaced(&self, list: &List) -> Self {
        Self {
            lists: self
                .lists
                .iter()
                .map(|l| if l.id == list.id { list.clone() } else { l.clone() })
                .collect(),
            ..self.clone()
        }
    }

    /// Copy without the given list (and its tasks)
    pub fn without_list(&self, id: &ListId) -> Self {
        Self {
            lists: self.lists.iter().filter(|l| &l.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    /// Copy with a task moved to the end of another list.
    ///
    /// Only the list holding the task loses it. Unknown task, unknown target,
    /// or a target equal to the source yields an unchanged copy.
    pub fn with_task_moved(&self, task_id: &TaskId, to: &ListId) -> Self {
        let Some(source) = self.list_of_task(task_id) else {
            return self.clone();
        };
        if &source.id == to || self.find_list(to).is_none() {
            return self.clone();
        }
        let Some(task) = source.find_task(task_id).cloned() else {
            return self.clone();
        };
        let source_id = source.id.clone();

        Self {
            lists: self
                .lists
                .iter()
                .map(|l| {
                    if &l.id == to {
                        l.with_task_added(task.clone())
                    } else if l.id == source_id {
                        l.without_task(task_id)
                    } else {
                        l.clone()
                    }
                })
                .collect(),
            ..self.clone()
        }
    }

    /// Copy with `active` reinserted at the index of `over`, both inside list `list_id`.
    ///
    /// Anything missing yields an unchanged copy.
    pub fn with_task_reordered(&self, list_id: &ListId, active: &TaskId, over: &TaskId) -> Self {
        let Some(list) = self.find_list(list_id) else {
            return self.clone();
        };
        match (list.position_of(active), list.position_of(over)) {
            (Some(from), Some(to)) if from != to => {
                self.with_list_replaced(&list.with_task_moved(from, to))
            }
            _ => self.clone(),
        }
    }
}

/// Dashboard card data for a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub name: String,
    pub lists: usize,
    pub tasks: usize,
    pub completed: usize,
}
