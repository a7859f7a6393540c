//! Shared fixtures for command tests

use crate::board::AddBoard;
use crate::context::TaskboardContext;
use crate::operation::Execute;
use crate::task::AddTask;
use crate::types::{BoardId, TaskId};

/// Add a board named `name` with one "To Do" task per title, in order
pub(crate) async fn board_with_tasks(
    ctx: &TaskboardContext,
    name: &str,
    titles: &[&str],
) -> (BoardId, Vec<TaskId>) {
    let board = AddBoard::new(name).execute(ctx).await.unwrap();
    let board = BoardId::from_string(board["id"].as_str().unwrap());

    let mut tasks = Vec::new();
    for title in titles {
        let task = AddTask::new(board.clone(), "todo", *title)
            .execute(ctx)
            .await
            .unwrap();
        tasks.push(TaskId::from_string(task["id"].as_str().unwrap()));
    }
    (board, tasks)
}
