//! Drag-and-drop coordination
//!
//! Gestures arrive as raw ids (a pointer drop names what was dragged and what it
//! landed on) or as a direction (keyboard). They resolve against the current board
//! into a [`DragIntent`], which the task commands then apply.

use crate::types::{Board, ListId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// End of a pointer drag: the dragged item and the drop target, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: String,
    #[serde(default)]
    pub over: Option<String>,
}

impl DragEnd {
    pub fn new(active: impl Into<String>, over: Option<String>) -> Self {
        Self {
            active: active.into(),
            over,
        }
    }
}

/// Keyboard movement of a focused task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for KeyDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown direction '{other}' (expected up, down, left or right)")),
        }
    }
}

impl fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// What a gesture asks the board to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragIntent {
    /// Reinsert `active` at the index of `over`, inside `list`
    Reorder {
        list: ListId,
        active: TaskId,
        over: TaskId,
    },
    /// Append `task` to list `to`, removing it from its current list
    Move { task: TaskId, to: ListId },
}

impl DragIntent {
    /// The board after applying this intent
    pub fn apply(&self, board: &Board) -> Board {
        match self {
            Self::Reorder { list, active, over } => board.with_task_reordered(list, active, over),
            Self::Move { task, to } => board.with_task_moved(task, to),
        }
    }
}

/// Resolve a pointer drop.
///
/// Dropping a task on another list's container moves it there; dropping it on a
/// task of the same list reorders. Anything else resolves to nothing.
pub fn resolve_drop(board: &Board, drop: &DragEnd) -> Option<DragIntent> {
    let over = drop.over.as_deref()?;
    if drop.active == over {
        return None;
    }

    let active = TaskId::from_string(drop.active.as_str());
    let source = board.list_of_task(&active)?;

    let over_list = ListId::from_string(over);
    if board.find_list(&over_list).is_some() {
        if source.id == over_list {
            return None;
        }
        return Some(DragIntent::Move {
            task: active,
            to: over_list,
        });
    }

    let over_task = TaskId::from_string(over);
    match board.list_of_task(&over_task) {
        Some(target) if target.id == source.id => Some(DragIntent::Reorder {
            list: source.id.clone(),
            active,
            over: over_task,
        }),
        _ => None,
    }
}

/// Resolve a keyboard move of `task`.
///
/// Up/Down swap with the neighbouring task; Left/Right move to the end of the
/// neighbouring list. Nothing happens at an edge.
pub fn resolve_key(board: &Board, task: &TaskId, direction: KeyDirection) -> Option<DragIntent> {
    let list_index = board.lists.iter().position(|l| l.contains_task(task))?;
    let list = &board.lists[list_index];
    let index = list.position_of(task)?;

    match direction {
        KeyDirection::Up => {
            let neighbour = list.tasks.get(index.checked_sub(1)?)?;
            Some(DragIntent::Reorder {
                list: list.id.clone(),
                active: task.clone(),
                over: neighbour.id.clone(),
            })
        }
        KeyDirection::Down => {
            let neighbour = list.tasks.get(index + 1)?;
            Some(DragIntent::Reorder {
                list: list.id.clone(),
                active: task.clone(),
                over: neighbour.id.clone(),
            })
        }
        KeyDirection::Left => {
            let target = board.lists.get(list_index.checked_sub(1)?)?;
            Some(DragIntent::Move {
                task: task.clone(),
                to: target.id.clone(),
            })
        }
        KeyDirection::Right => {
            let target = board.lists.get(list_index + 1)?;
            Some(DragIntent::Move {
                task: task.clone(),
                to: target.id.clone(),
            })
        }
    }
}
