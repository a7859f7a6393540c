//! Taskboard CLI: argument parsing, configuration and command dispatch
//!
//! The `taskboard` binary is a thin shell over this crate; everything it does
//! can be driven from tests through [`commands::run`].

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::{CliOverrides, Config, ConfigError, ConfigLoader};
