//! Cosmic Tales CLI binary.
//!
//! This binary provides command-line access to Cosmic Tales:
//! - Generate single space adventure stories
//! - Play an interactive roleplay adventure
//! - List the playable characters

use std::sync::Arc;

use clap::Parser;
use cosmic::{ContentTable, CosmicConfig};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_characters, run_generate, run_roleplay};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let content = Arc::new(ContentTable::bundled()?);

    // Execute the requested command
    match cli.command {
        Commands::Characters { format } => {
            list_characters(&content, format)?;
        }

        Commands::Generate {
            prompt,
            idea,
            format,
        } => {
            let config = CosmicConfig::load_with_override(cli.config.as_deref())?;
            run_generate(&config, content, prompt.as_deref(), idea.as_deref(), format).await?;
        }

        Commands::Roleplay { character } => {
            let config = CosmicConfig::load_with_override(cli.config.as_deref())?;
            run_roleplay(&config, content, character.as_deref()).await?;
        }
    }

    Ok(())
}
