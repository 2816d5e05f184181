//! Single-shot story command handler.

use std::sync::Arc;

use cosmic::{
    ContentTable, CosmicConfig, CosmicResult, GeminiHttpClient, OutputError, StorySession,
    StoryTeller, StoryView, TerminalView,
};

use super::OutputFormat;

/// Generate one story and print it.
///
/// `prompt` is sent verbatim; `idea` is wrapped in the custom story
/// template. With neither, a random scenario is used.
#[tracing::instrument(skip_all, fields(has_prompt = prompt.is_some(), has_idea = idea.is_some()))]
pub async fn run_generate(
    config: &CosmicConfig,
    content: Arc<ContentTable>,
    prompt: Option<&str>,
    idea: Option<&str>,
    format: OutputFormat,
) -> CosmicResult<()> {
    let client = GeminiHttpClient::from_config(config)?;
    let teller = StoryTeller::new(client, config, content);
    let mut session = StorySession::new();

    match format {
        OutputFormat::Human => {
            let mut view = TerminalView::stdout();
            let result = match idea {
                Some(idea) => teller.custom_prompt(&mut session, &mut view, idea).await,
                None => Ok(teller.generate_story(&mut session, &mut view, prompt).await),
            };
            if let Err(e) = result {
                view.display_error(&e.to_string());
                return Err(e);
            }
        }
        OutputFormat::Json => {
            // Render into a discarded buffer so only JSON reaches stdout
            let mut view = TerminalView::new(std::io::sink());
            let unit = match idea {
                Some(idea) => teller.custom_prompt(&mut session, &mut view, idea).await?,
                None => teller.generate_story(&mut session, &mut view, prompt).await,
            };
            let json = serde_json::to_string_pretty(&unit)
                .map_err(|e| OutputError::new("json", e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}
