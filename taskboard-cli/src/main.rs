//! Taskboard CLI - manage kanban boards from the terminal.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskboard::{FileStorage, TaskboardContext, TaskboardError, TaskboardProcessor};
use taskboard_cli::commands;
use taskboard_cli::{Cli, CliOverrides, ConfigLoader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug,taskboard_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(result_to_exit(run(cli).await));
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigLoader::new().load(&CliOverrides {
        data_dir: cli.data_dir.clone(),
        actor: cli.actor.clone(),
    })?;

    let ctx = TaskboardContext::open(FileStorage::new(&config.data_dir)).await?;
    let processor = match &config.actor {
        Some(actor) => TaskboardProcessor::with_actor(actor.as_str()),
        None => TaskboardProcessor::new(),
    };

    let value = commands::run(cli.command, &ctx, &processor).await?;
    println!("{}", commands::render(&value, cli.format)?);
    Ok(())
}

/// Convert a result to an exit code, reporting the error on stderr.
fn result_to_exit(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            match e.downcast_ref::<TaskboardError>() {
                Some(err) if err.is_user_error() => {}
                _ => tracing::error!("{:#}", e),
            }
            eprintln!("Error: {}", e);
            1
        }
    }
}
