//! Single-shot story generation.

use std::sync::Arc;

use cosmic_config::CosmicConfig;
use cosmic_core::StoryUnit;
use cosmic_error::CosmicResult;
use cosmic_interface::{ContentGenerator, StoryView};
use cosmic_models::EndpointFallbackClient;
use tracing::{debug, info, instrument, warn};

use crate::{ContentTable, StorySession, parse_narrative};

/// Generates one self-contained story per request.
///
/// Any failure along the way (network, response format, empty text) is
/// replaced with one of the bundled fallback stories, so a request always
/// ends with a story on screen.
#[derive(Debug)]
pub struct StoryTeller<G> {
    client: EndpointFallbackClient<G>,
    content: Arc<ContentTable>,
    simplified_prompt: String,
}

impl<G: ContentGenerator> StoryTeller<G> {
    /// Create a storyteller over `generator` using the endpoints and the
    /// simplified story prompt from `config`.
    pub fn new(generator: G, config: &CosmicConfig, content: Arc<ContentTable>) -> Self {
        Self {
            client: EndpointFallbackClient::new(generator, config),
            content,
            simplified_prompt: config.fallback_prompts.story.clone(),
        }
    }

    /// The endpoint fallback client.
    pub fn client(&self) -> &EndpointFallbackClient<G> {
        &self.client
    }

    /// Generate and display a story.
    ///
    /// Uses `prompt_override` when given, otherwise a random scenario
    /// prompt. Returns `None` without touching the session or the view when
    /// a generation is already running.
    #[instrument(skip_all, fields(custom = prompt_override.is_some()))]
    pub async fn generate_story(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
        prompt_override: Option<&str>,
    ) -> Option<StoryUnit> {
        let Some(_in_flight) = session.flag().try_acquire() else {
            debug!("Generation already in progress, ignoring request");
            return None;
        };

        view.show_loading(true);

        let prompt = match prompt_override {
            Some(prompt) => prompt.to_string(),
            None => self
                .content
                .random_story_prompt(&mut rand::thread_rng())
                .to_string(),
        };

        let unit = match self.client.call_api(&prompt, &self.simplified_prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Model returned empty text, using fallback story");
                self.fallback()
            }
            Ok(text) => parse_narrative(&text).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to parse story, using fallback story");
                self.fallback()
            }),
            Err(e) => {
                warn!(error = %e, "Story generation failed, using fallback story");
                self.fallback()
            }
        };

        info!(paragraphs = unit.paragraphs().count(), "Story ready");
        session.set_current(unit.clone());
        view.display_story(&unit);
        view.show_loading(false);
        Some(unit)
    }

    /// Generate a story from a user's idea.
    ///
    /// # Errors
    ///
    /// Fails before any request when the idea is blank.
    pub async fn custom_prompt(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
        idea: &str,
    ) -> CosmicResult<Option<StoryUnit>> {
        let prompt = self.content.custom_prompt(idea)?;
        Ok(self.generate_story(session, view, Some(&prompt)).await)
    }

    /// Generate a fresh story from a random scenario.
    pub async fn regenerate(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
    ) -> Option<StoryUnit> {
        self.generate_story(session, view, None).await
    }

    fn fallback(&self) -> StoryUnit {
        StoryUnit::narrative(self.content.random_fallback_story(&mut rand::thread_rng()))
    }
}
