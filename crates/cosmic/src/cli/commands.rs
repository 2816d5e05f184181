//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cosmic Tales - space adventure stories and roleplay powered by Gemini
#[derive(Parser, Debug)]
#[command(name = "cosmic")]
#[command(about = "Space adventure stories and branching roleplay powered by Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a single space adventure story
    Generate {
        /// Exact prompt to send
        #[arg(long, conflicts_with = "idea")]
        prompt: Option<String>,

        /// Story idea, wrapped in the custom story template
        #[arg(long)]
        idea: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Play an interactive roleplay adventure
    Roleplay {
        /// Character to play (astronaut, scientist, pilot, engineer)
        #[arg(long)]
        character: Option<String>,
    },

    /// List the playable characters
    Characters {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
