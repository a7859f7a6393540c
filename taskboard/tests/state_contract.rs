//! End-to-end behavior of the state store through its public commands

use taskboard::board::{AddBoard, CloseBoard, DeleteBoard, ListBoards, OpenBoard, ReorderBoards};
use taskboard::dnd::KeyDirection;
use taskboard::list::{AddList, DeleteList};
use taskboard::task::{AddTask, DropTask, MoveTask, NudgeTask, SearchTasks};
use taskboard::theme::ToggleDarkMode;
use taskboard::{BoardId, Execute, TaskId, TaskboardContext, TaskboardError, View};

async fn add_board(ctx: &TaskboardContext, name: &str) -> BoardId {
    let value = AddBoard::new(name).execute(ctx).await.unwrap();
    BoardId::from_string(value["id"].as_str().unwrap())
}

async fn add_task(ctx: &TaskboardContext, board: &BoardId, list: &str, title: &str) -> TaskId {
    let value = AddTask::new(board.clone(), list, title)
        .execute(ctx)
        .await
        .unwrap();
    TaskId::from_string(value["id"].as_str().unwrap())
}

#[tokio::test]
async fn new_boards_start_with_three_empty_lists() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Roadmap").await;

    let board = ctx.board(&board).await.unwrap();
    let names: Vec<_> = board.lists.iter().map(|l| l.name.as_str()).collect();
    let ids: Vec<_> = board.lists.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(names, vec!["To Do", "In Progress", "Done"]);
    assert_eq!(ids, vec!["todo", "in-progress", "done"]);
    assert!(board.lists.iter().all(|l| l.tasks.is_empty()));
}

#[tokio::test]
async fn dashboard_counts_follow_the_done_list() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Roadmap").await;
    let a = add_task(&ctx, &board, "todo", "alpha").await;
    add_task(&ctx, &board, "todo", "beta").await;
    add_task(&ctx, &board, "in-progress", "gamma").await;

    MoveTask::new(board.clone(), a, "done").execute(&ctx).await.unwrap();

    let listing = ListBoards::default().execute(&ctx).await.unwrap();
    let summary = &listing["boards"][0];
    assert_eq!(summary["tasks"], 3);
    assert_eq!(summary["completed"], 1);
    assert_eq!(summary["lists"], 3);
}

#[tokio::test]
async fn moves_never_lose_or_duplicate_tasks() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Juggling").await;
    let mut tasks = Vec::new();
    for title in ["one", "two", "three", "four"] {
        tasks.push(add_task(&ctx, &board, "todo", title).await);
    }

    let gestures = [
        (0, KeyDirection::Right),
        (0, KeyDirection::Right),
        (1, KeyDirection::Down),
        (2, KeyDirection::Left),
        (3, KeyDirection::Up),
        (0, KeyDirection::Left),
    ];
    for (index, direction) in gestures {
        NudgeTask::new(board.clone(), tasks[index].clone(), direction)
            .execute(&ctx)
            .await
            .unwrap();
        let snapshot = ctx.board(&board).await.unwrap();
        assert_eq!(snapshot.task_count(), 4);
        for id in &tasks {
            let holders = snapshot.lists.iter().filter(|l| l.contains_task(id)).count();
            assert_eq!(holders, 1);
        }
    }
}

#[tokio::test]
async fn drop_on_task_in_other_list_changes_nothing() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Juggling").await;
    let a = add_task(&ctx, &board, "todo", "alpha").await;
    let b = add_task(&ctx, &board, "done", "beta").await;
    let before = ctx.board(&board).await.unwrap();

    let result = DropTask::new(board.clone(), a.as_str(), Some(b.to_string()))
        .execute(&ctx)
        .await
        .unwrap();

    assert!(result["intent"].is_null());
    assert_eq!(ctx.board(&board).await.unwrap(), before);
}

#[tokio::test]
async fn deleting_open_board_returns_to_dashboard() {
    let ctx = TaskboardContext::in_memory();
    let keep = add_board(&ctx, "Keep").await;
    let doomed = add_board(&ctx, "Doomed").await;
    OpenBoard::new(doomed.clone()).execute(&ctx).await.unwrap();
    assert_eq!(ctx.view().await, View::Board(doomed.clone()));

    DeleteBoard::new(doomed).execute(&ctx).await.unwrap();

    assert_eq!(ctx.view().await, View::Dashboard);
    assert_eq!(ctx.state().await.boards.len(), 1);
    assert_eq!(ctx.state().await.boards[0].id, keep);
}

#[tokio::test]
async fn opening_unknown_board_fails() {
    let ctx = TaskboardContext::in_memory();
    let result = OpenBoard::new("ghost").execute(&ctx).await;
    assert!(matches!(result, Err(TaskboardError::BoardNotFound { .. })));
    CloseBoard::default().execute(&ctx).await.unwrap();
    assert_eq!(ctx.view().await, View::Dashboard);
}

#[tokio::test]
async fn boards_reorder_on_the_dashboard() {
    let ctx = TaskboardContext::in_memory();
    let a = add_board(&ctx, "Alpha").await;
    let b = add_board(&ctx, "Bravo").await;
    let c = add_board(&ctx, "Charlie").await;

    ReorderBoards::new(c.clone(), a.clone()).execute(&ctx).await.unwrap();

    let order: Vec<_> = ctx.state().await.boards.into_iter().map(|b| b.id).collect();
    assert_eq!(order, vec![c, a, b]);
}

#[tokio::test]
async fn deleting_a_list_drops_its_tasks() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Lists").await;
    let review = AddList::new(board.clone(), "Review").execute(&ctx).await.unwrap();
    let review_id = review["id"].as_str().unwrap().to_string();
    add_task(&ctx, &board, &review_id, "check").await;
    add_task(&ctx, &board, "todo", "stay").await;

    DeleteList::new(board.clone(), review_id).execute(&ctx).await.unwrap();

    let snapshot = ctx.board(&board).await.unwrap();
    assert_eq!(snapshot.lists.len(), 3);
    assert_eq!(snapshot.task_count(), 1);
}

#[tokio::test]
async fn search_is_a_view_not_a_change() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Kitchen").await;
    add_task(&ctx, &board, "todo", "Buy saffron").await;
    add_task(&ctx, &board, "todo", "Clean oven").await;
    let before = ctx.state().await;

    let hits = SearchTasks::new(board.clone(), "SAFFRON").execute(&ctx).await.unwrap();
    let blank = SearchTasks::new(board.clone(), "   ").execute(&ctx).await.unwrap();

    assert_eq!(hits["lists"][0]["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(blank["lists"][0]["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(ctx.state().await, before);
}

#[tokio::test]
async fn theme_toggle_is_independent_of_boards() {
    let ctx = TaskboardContext::in_memory();
    let board = add_board(&ctx, "Theme").await;
    let before = ctx.board(&board).await.unwrap();

    ToggleDarkMode::default().execute(&ctx).await.unwrap();

    assert!(ctx.state().await.dark_mode);
    assert_eq!(ctx.board(&board).await.unwrap(), before);
}
