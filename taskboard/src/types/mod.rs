//! Core types for the taskboard engine

mod board;
mod ids;
mod list;
mod log;
mod state;
mod task;

// Re-export all types
pub use board::{Board, BoardSummary, DONE_LIST_NAME};
pub use ids::{ActivityId, BoardId, ListId, TaskId};
pub use list::List;
pub use log::ActivityEntry;
pub use state::{AppState, View};
pub use task::Task;

/// Remove the item at `from` and reinsert it at `to`, returning a new vector.
///
/// Out-of-range indices return an unchanged copy.
pub(crate) fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}
