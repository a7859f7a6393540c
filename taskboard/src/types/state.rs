//! The whole persisted tree and the current view

use super::board::{Board, BoardSummary};
use super::ids::BoardId;
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root of the state tree. Every committed change replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(boards: Vec<Board>, dark_mode: bool) -> Self {
        Self { boards, dark_mode }
    }

    /// Check board id uniqueness and every board's own invariants
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for board in &self.boards {
            if !seen.insert(&board.id) {
                return Err(TaskboardError::duplicate_id("board", board.id.as_str()));
            }
            board.validate()?;
        }
        Ok(())
    }

    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn summaries(&self) -> Vec<BoardSummary> {
        self.boards.iter().map(Board::summary).collect()
    }

    pub fn with_board_added(&self, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards.push(board);
        Self {
            boards,
            dark_mode: self.dark_mode,
        }
    }

    pub fn with_board_replaced(&self, board: &Board) -> Self {
        Self {
            boards: self
                .boards
                .iter()
                .map(|b| if b.id == board.id { board.clone() } else { b.clone() })
                .collect(),
            dark_mode: self.dark_mode,
        }
    }

    pub fn without_board(&self, id: &BoardId) -> Self {
        Self {
            boards: self.boards.iter().filter(|b| &b.id != id).cloned().collect(),
            dark_mode: self.dark_mode,
        }
    }

    /// Copy with board `active` moved to the index of board `over`
    pub fn with_boards_reordered(&self, active: &BoardId, over: &BoardId) -> Self {
        let from = self.boards.iter().position(|b| &b.id == active);
        let to = self.boards.iter().position(|b| &b.id == over);
        match (from, to) {
            (Some(from), Some(to)) if from != to => Self {
                boards: super::array_move(&self.boards, from, to),
                dark_mode: self.dark_mode,
            },
            _ => self.clone(),
        }
    }

    pub fn with_dark_mode(&self, dark_mode: bool) -> Self {
        Self {
            boards: self.boards.clone(),
            dark_mode,
        }
    }
}

/// What the user is looking at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "id", rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Board(BoardId),
}

impl View {
    pub fn is_board(&self, id: &BoardId) -> bool {
        matches!(self, Self::Board(open) if open == id)
    }
}
