//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the cosmic binary.

mod characters;
mod commands;
mod generate;
mod roleplay;

pub use characters::list_characters;
pub use commands::{Cli, Commands, OutputFormat};
pub use generate::run_generate;
pub use roleplay::run_roleplay;
