//! Branching roleplay adventure.

use std::sync::Arc;

use cosmic_config::CosmicConfig;
use cosmic_core::{Character, CharacterProfile, StoryUnit};
use cosmic_error::{CosmicResult, StoryError, StoryErrorKind};
use cosmic_interface::{ContentGenerator, StoryView};
use cosmic_models::EndpointFallbackClient;
use tracing::{debug, info, instrument, warn};

use crate::{ContentTable, StorySession, parse_story_response};

/// Runs a character-driven adventure, one turn at a time.
///
/// Each turn asks the model for a `STORY:`/`CHOICES:` response. When the
/// request or the parse fails, a pre-written opening or continuation for the
/// character takes its place. Every unit shown is appended to the session
/// history.
#[derive(Debug)]
pub struct Roleplay<G> {
    client: EndpointFallbackClient<G>,
    content: Arc<ContentTable>,
    simplified_prompt: String,
}

impl<G: ContentGenerator> Roleplay<G> {
    /// Create a roleplay over `generator` using the endpoints and the
    /// simplified roleplay prompt from `config`.
    pub fn new(generator: G, config: &CosmicConfig, content: Arc<ContentTable>) -> Self {
        Self {
            client: EndpointFallbackClient::new(generator, config),
            content,
            simplified_prompt: config.fallback_prompts.roleplay.clone(),
        }
    }

    /// The endpoint fallback client.
    pub fn client(&self) -> &EndpointFallbackClient<G> {
        &self.client
    }

    /// Choose the character and return its profile.
    pub fn select_character(
        &self,
        session: &mut StorySession,
        character: Character,
    ) -> &CharacterProfile {
        session.select_character(character);
        self.content.profile(character)
    }

    /// Generate and display the opening of an adventure.
    ///
    /// Returns `Ok(None)` when a generation is already running.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::NoCharacterSelected`] before a character is chosen.
    #[instrument(skip_all)]
    pub async fn start_adventure(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
    ) -> CosmicResult<Option<StoryUnit>> {
        let character = require_character(session)?;

        let Some(_in_flight) = session.flag().try_acquire() else {
            debug!("Generation already in progress, ignoring request");
            return Ok(None);
        };

        info!(%character, "Starting adventure");
        let prompt = self
            .content
            .intro_prompt(character, &mut rand::thread_rng());

        let unit = self
            .turn(view, &prompt, || self.content.intro_fallback(character))
            .await;
        Ok(Some(self.show(session, view, unit)))
    }

    /// Pick choice `index` (zero-based) from the latest unit and continue
    /// the story from it.
    ///
    /// Returns `Ok(None)` without recording anything when a generation is
    /// already running.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::NoCharacterSelected`] before a character is chosen,
    /// [`StoryErrorKind::ChoiceOutOfRange`] for an index the latest unit
    /// does not offer.
    #[instrument(skip(self, session, view))]
    pub async fn make_choice(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
        index: usize,
    ) -> CosmicResult<Option<StoryUnit>> {
        let character = require_character(session)?;

        let Some(_in_flight) = session.flag().try_acquire() else {
            debug!("Generation already in progress, ignoring choice");
            return Ok(None);
        };

        let choice = session.history_mut().select_on_latest(index)?;
        info!(%character, choice = %choice, "Choice made");

        let prompt = self.content.continuation_prompt(character, &choice);
        let unit = self
            .turn(view, &prompt, || {
                self.content.continuation_fallback(character, &choice)
            })
            .await;
        Ok(Some(self.show(session, view, unit)))
    }

    /// Start over with the same character.
    ///
    /// # Errors
    ///
    /// As [`Roleplay::start_adventure`].
    pub async fn restart(
        &self,
        session: &mut StorySession,
        view: &mut dyn StoryView,
    ) -> CosmicResult<Option<StoryUnit>> {
        if session.is_generating() {
            debug!("Generation already in progress, ignoring restart");
            return Ok(None);
        }
        session.reset();
        self.start_adventure(session, view).await
    }

    /// Return to character selection, clearing the character and history.
    pub fn show_welcome(&self, session: &mut StorySession) {
        session.reset_all();
    }

    /// One request/parse round with loading shown for its duration.
    async fn turn(
        &self,
        view: &mut dyn StoryView,
        prompt: &str,
        fallback: impl FnOnce() -> StoryUnit,
    ) -> StoryUnit {
        view.show_loading(true);

        let parsed = self
            .client
            .call_api(prompt, &self.simplified_prompt)
            .await
            .and_then(|text| {
                let unit = parse_story_response(&text);
                if unit.has_choices() {
                    Ok(unit)
                } else {
                    Err(StoryError::new(StoryErrorKind::NoChoices).into())
                }
            });

        let unit = parsed.unwrap_or_else(|e| {
            warn!(error = %e, "Roleplay turn failed, using fallback narrative");
            fallback()
        });

        view.show_loading(false);
        unit
    }

    fn show(&self, session: &mut StorySession, view: &mut dyn StoryView, unit: StoryUnit) -> StoryUnit {
        session.history_mut().push(unit.clone());
        session.set_current(unit.clone());
        view.display_story(&unit);
        unit
    }
}

fn require_character(session: &StorySession) -> CosmicResult<Character> {
    (*session.selected_character())
        .ok_or_else(|| StoryError::new(StoryErrorKind::NoCharacterSelected).into())
}
