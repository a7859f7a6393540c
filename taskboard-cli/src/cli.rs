//! CLI definition for the taskboard command-line interface.
//!
//! Only depends on `clap` and `std`; mapping onto engine commands happens in
//! [`crate::commands`].

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// How results are printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Keyboard-style step for `task nudge`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Color scheme for `theme set`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Taskboard - boards, lists and tasks from the terminal
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Manage kanban boards, lists and tasks")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory holding boards.json, dark-mode.json and activity.jsonl
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name recorded with each change in the activity log
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, list and manage boards
    Board {
        #[command(subcommand)]
        action: BoardCommand,
    },
    /// Add, rename and delete lists on a board
    List {
        #[command(subcommand)]
        action: ListCommand,
    },
    /// Add, edit, move and search tasks
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },
    /// Show or change the color scheme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
    /// Export all boards and settings as a backup document
    Export {
        /// Write the backup to this file (or into this directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore boards and settings from a backup file
    Import {
        /// Backup file to read
        file: PathBuf,
    },
    /// Show recent changes, newest first
    Activity {
        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BoardCommand {
    /// Create a board with To Do, In Progress and Done lists
    Add { name: String },
    /// List boards with task counts
    List,
    /// Show one board with its lists and tasks
    Show { id: String },
    /// Rename a board
    Rename { id: String, name: String },
    /// Delete a board and everything on it
    Delete { id: String },
    /// Move board ACTIVE to the position of board OVER
    Reorder { active: String, over: String },
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// Append a list to a board
    Add { board: String, name: String },
    /// Rename a list
    Rename {
        board: String,
        id: String,
        name: String,
    },
    /// Delete a list and its tasks
    Delete { board: String, id: String },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Add a task to the end of a list
    Add {
        board: String,
        title: String,
        /// List to add to
        #[arg(short, long, default_value = "todo")]
        list: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show one task
    Show { board: String, id: String },
    /// Change a task's title or description (an empty description clears it)
    Edit {
        board: String,
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a task
    Delete { board: String, id: String },
    /// Move a task to the end of another list
    Move { board: String, id: String, to: String },
    /// Move task ACTIVE to the position of task OVER within LIST
    Reorder {
        board: String,
        list: String,
        active: String,
        over: String,
    },
    /// Drop task ACTIVE onto a list or task, as a drag would
    Drop {
        board: String,
        active: String,
        over: Option<String>,
    },
    /// Move a task one step
    Nudge {
        board: String,
        id: String,
        #[arg(value_enum)]
        direction: NudgeDirection,
    },
    /// Show a board with only the tasks matching QUERY
    Search { board: String, query: String },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Show the current color scheme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Choose a color scheme
    Set {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
}

impl Cli {
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
