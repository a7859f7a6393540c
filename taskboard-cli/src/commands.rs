//! Maps parsed commands onto engine operations and renders their results

use crate::cli::{
    BoardCommand, Commands, ListCommand, NudgeDirection, OutputFormat, TaskCommand, ThemeCommand,
    ThemeMode,
};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::Path;
use taskboard::activity::ListActivity;
use taskboard::backup::{ExportState, ImportState};
use taskboard::board::{AddBoard, DeleteBoard, GetBoard, ListBoards, RenameBoard, ReorderBoards};
use taskboard::dnd::KeyDirection;
use taskboard::list::{AddList, DeleteList, RenameList};
use taskboard::task::{
    AddTask, DeleteTask, DropTask, GetTask, MoveTask, NudgeTask, ReorderTask, SearchTasks,
    UpdateTask,
};
use taskboard::theme::{GetTheme, SetDarkMode, ToggleDarkMode};
use taskboard::{TaskboardContext, TaskboardProcessor};

impl From<NudgeDirection> for KeyDirection {
    fn from(direction: NudgeDirection) -> Self {
        match direction {
            NudgeDirection::Up => KeyDirection::Up,
            NudgeDirection::Down => KeyDirection::Down,
            NudgeDirection::Left => KeyDirection::Left,
            NudgeDirection::Right => KeyDirection::Right,
        }
    }
}

/// Run one command and return its result
pub async fn run(
    command: Commands,
    ctx: &TaskboardContext,
    processor: &TaskboardProcessor,
) -> Result<Value> {
    let value = match command {
        Commands::Board { action } => run_board(action, ctx, processor).await?,
        Commands::List { action } => run_list(action, ctx, processor).await?,
        Commands::Task { action } => run_task(action, ctx, processor).await?,
        Commands::Theme { action } => run_theme(action, ctx, processor).await?,
        Commands::Export { output } => match output {
            Some(path) => export_to(&path, ctx).await?,
            None => processor.process(&ExportState::default(), ctx).await?,
        },
        Commands::Import { file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            processor.process(&ImportState::new(content), ctx).await?
        }
        Commands::Activity { limit } => {
            processor
                .process(&ListActivity { limit }, ctx)
                .await?
        }
    };
    Ok(value)
}

async fn run_board(
    action: BoardCommand,
    ctx: &TaskboardContext,
    processor: &TaskboardProcessor,
) -> Result<Value> {
    let value = match action {
        BoardCommand::Add { name } => processor.process(&AddBoard::new(name), ctx).await?,
        BoardCommand::List => processor.process(&ListBoards::new(), ctx).await?,
        BoardCommand::Show { id } => processor.process(&GetBoard::new(id), ctx).await?,
        BoardCommand::Rename { id, name } => {
            processor.process(&RenameBoard::new(id, name), ctx).await?
        }
        BoardCommand::Delete { id } => processor.process(&DeleteBoard::new(id), ctx).await?,
        BoardCommand::Reorder { active, over } => {
            processor
                .process(&ReorderBoards::new(active, over), ctx)
                .await?
        }
    };
    Ok(value)
}

async fn run_list(
    action: ListCommand,
    ctx: &TaskboardContext,
    processor: &TaskboardProcessor,
) -> Result<Value> {
    let value = match action {
        ListCommand::Add { board, name } => {
            processor.process(&AddList::new(board, name), ctx).await?
        }
        ListCommand::Rename { board, id, name } => {
            processor
                .process(&RenameList::new(board, id, name), ctx)
                .await?
        }
        ListCommand::Delete { board, id } => {
            processor.process(&DeleteList::new(board, id), ctx).await?
        }
    };
    Ok(value)
}

async fn run_task(
    action: TaskCommand,
    ctx: &TaskboardContext,
    processor: &TaskboardProcessor,
) -> Result<Value> {
    let value = match action {
        TaskCommand::Add {
            board,
            title,
            list,
            description,
        } => {
            let mut op = AddTask::new(board, list, title);
            op.description = description;
            processor.process(&op, ctx).await?
        }
        TaskCommand::Show { board, id } => processor.process(&GetTask::new(board, id), ctx).await?,
        TaskCommand::Edit {
            board,
            id,
            title,
            description,
        } => {
            let mut op = UpdateTask::new(board, id);
            op.title = title;
            op.description = description;
            processor.process(&op, ctx).await?
        }
        TaskCommand::Delete { board, id } => {
            processor.process(&DeleteTask::new(board, id), ctx).await?
        }
        TaskCommand::Move { board, id, to } => {
            processor.process(&MoveTask::new(board, id, to), ctx).await?
        }
        TaskCommand::Reorder {
            board,
            list,
            active,
            over,
        } => {
            processor
                .process(&ReorderTask::new(board, list, active, over), ctx)
                .await?
        }
        TaskCommand::Drop {
            board,
            active,
            over,
        } => {
            processor
                .process(&DropTask::new(board, active, over), ctx)
                .await?
        }
        TaskCommand::Nudge {
            board,
            id,
            direction,
        } => {
            processor
                .process(&NudgeTask::new(board, id, direction.into()), ctx)
                .await?
        }
        TaskCommand::Search { board, query } => {
            processor
                .process(&SearchTasks::new(board, query), ctx)
                .await?
        }
    };
    Ok(value)
}

async fn run_theme(
    action: ThemeCommand,
    ctx: &TaskboardContext,
    processor: &TaskboardProcessor,
) -> Result<Value> {
    let value = match action {
        ThemeCommand::Show => processor.process(&GetTheme::default(), ctx).await?,
        ThemeCommand::Toggle => processor.process(&ToggleDarkMode::default(), ctx).await?,
        ThemeCommand::Set { mode } => {
            let op = SetDarkMode::new(mode == ThemeMode::Dark);
            processor.process(&op, ctx).await?
        }
    };
    Ok(value)
}

/// Write a backup to `path`, or into `path` under the dated default name when
/// it is a directory
async fn export_to(path: &Path, ctx: &TaskboardContext) -> Result<Value> {
    let doc = ExportState::default().document(ctx).await;
    let target = if path.is_dir() {
        path.join(doc.file_name())
    } else {
        path.to_path_buf()
    };

    tokio::fs::write(&target, doc.to_json_pretty()?)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), boards = doc.boards.len(), "backup written");

    Ok(json!({
        "path": target.display().to_string(),
        "boards": doc.boards.len(),
        "darkMode": doc.dark_mode,
    }))
}

/// Render a result for stdout
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    Ok(text)
}
