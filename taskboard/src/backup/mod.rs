//! Backup commands

mod export;
mod import;

pub use export::ExportState;
pub use import::ImportState;
