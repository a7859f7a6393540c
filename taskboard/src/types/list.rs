//! List: an ordered column of tasks

use super::ids::{ListId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of tasks within a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl List {
    /// Create an empty list with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ListId::new(), name)
    }

    /// Create an empty list with a fixed id
    pub fn with_id(id: impl Into<ListId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.position_of(id).is_some()
    }

    /// Copy with `task` appended
    pub fn with_task_added(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self {
            tasks,
            ..self.clone()
        }
    }

    /// Copy with the task sharing `task.id` replaced
    pub fn with_task_replaced(&self, task: &Task) -> Self {
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|t| if t.id == task.id { task.clone() } else { t.clone() })
                .collect(),
            ..self.clone()
        }
    }

    /// Copy without the given task
    pub fn without_task(&self, id: &TaskId) -> Self {
        Self {
            tasks: self.tasks.iter().filter(|t| &t.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    /// Copy with the task at `from` removed and reinserted at `to`
    pub fn with_task_moved(&self, from: usize, to: usize) -> Self {
        Self {
            tasks: super::array_move(&self.tasks, from, to),
            ..self.clone()
        }
    }
}
