//! Bundled prompts, character profiles and fallback narratives.

use std::collections::BTreeMap;

use cosmic_core::{Character, CharacterProfile, StoryUnit};
use cosmic_error::{CosmicResult, StoryError, StoryErrorKind};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Bundled content table.
const DEFAULT_CONTENT: &str = include_str!("../content.toml");

/// Pre-written continuation used when a roleplay turn fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Continuation {
    /// Choice text this continuation answers
    choice: String,
    /// Narrative shown after the choice
    story: String,
    /// Next choices
    choices: Vec<String>,
}

impl Continuation {
    /// The continuation as a story unit.
    pub fn to_unit(&self) -> StoryUnit {
        StoryUnit::new(self.story.clone(), self.choices.clone())
    }
}

/// Every piece of static text the orchestrators draw on.
///
/// Loaded once from TOML and shared read-only. Character-keyed tables use
/// the lowercase character name (`astronaut`, `scientist`, ...).
///
/// # Examples
///
/// ```
/// use cosmic_core::Character;
/// use cosmic_narrative::ContentTable;
///
/// let content = ContentTable::bundled().unwrap();
/// assert_eq!(content.story_prompts().len(), 10);
/// assert_eq!(content.profile(Character::Pilot).name(), "Starship Pilot");
/// ```
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ContentTable {
    /// Scenario prompts for single-shot stories
    story_prompts: Vec<String>,
    /// Wraps a user idea; contains `{idea}`
    custom_story_template: String,
    /// Stories shown when single-shot generation fails
    fallback_stories: Vec<String>,
    /// Roleplay openings; contain `{name}` and `{traits}`
    intro_templates: Vec<String>,
    /// Roleplay follow-up; contains `{name}`, `{traits}` and `{choice}`
    continuation_template: String,
    /// Profiles by character
    characters: BTreeMap<String, CharacterProfile>,
    /// Opening narratives by character
    intro_fallbacks: BTreeMap<String, StoryUnit>,
    /// Ordered continuation narratives by character
    #[serde(default)]
    continuations: BTreeMap<String, Vec<Continuation>>,
}

impl ContentTable {
    /// Load the table compiled into the binary.
    #[instrument]
    pub fn bundled() -> CosmicResult<Self> {
        Self::from_toml_str(DEFAULT_CONTENT)
    }

    /// Parse and validate a content table.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, empty prompt or story lists, a character
    /// without a profile or opening, or an empty astronaut continuation list.
    pub fn from_toml_str(source: &str) -> CosmicResult<Self> {
        let table: Self = toml::from_str(source).map_err(|e| {
            StoryError::new(StoryErrorKind::ContentTable(format!("Invalid TOML: {}", e)))
        })?;
        table.validate()?;
        debug!(
            prompts = table.story_prompts.len(),
            characters = table.characters.len(),
            "Loaded content table"
        );
        Ok(table)
    }

    fn validate(&self) -> CosmicResult<()> {
        let invalid = |message: String| StoryError::new(StoryErrorKind::ContentTable(message));

        if self.story_prompts.is_empty() {
            return Err(invalid("story_prompts is empty".to_string()).into());
        }
        if self.fallback_stories.is_empty() {
            return Err(invalid("fallback_stories is empty".to_string()).into());
        }
        if self.intro_templates.is_empty() {
            return Err(invalid("intro_templates is empty".to_string()).into());
        }

        for character in Character::iter() {
            if !self.characters.contains_key(key(character)) {
                return Err(invalid(format!("No profile for {}", character)).into());
            }
            match self.intro_fallbacks.get(key(character)) {
                Some(unit) if unit.has_choices() => {}
                _ => return Err(invalid(format!("No opening with choices for {}", character)).into()),
            }
        }

        let astronaut_has_continuations = self
            .continuations
            .get(key(Character::Astronaut))
            .is_some_and(|entries| !entries.is_empty());
        if !astronaut_has_continuations {
            return Err(invalid("No continuations for astronaut".to_string()).into());
        }

        Ok(())
    }

    /// Profile for `character`.
    pub fn profile(&self, character: Character) -> &CharacterProfile {
        // Presence of every character is checked on load.
        &self.characters[key(character)]
    }

    /// All characters with their profiles, in declaration order.
    pub fn roster(&self) -> Vec<(Character, &CharacterProfile)> {
        Character::iter()
            .map(|character| (character, self.profile(character)))
            .collect()
    }

    /// A random scenario prompt.
    pub fn random_story_prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.story_prompts, rng)
    }

    /// A random single-shot fallback story.
    pub fn random_fallback_story<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.fallback_stories, rng)
    }

    /// Wrap a user idea in the custom story template.
    ///
    /// # Errors
    ///
    /// [`StoryErrorKind::EmptyIdea`] when the idea is blank.
    pub fn custom_prompt(&self, idea: &str) -> CosmicResult<String> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyIdea).into());
        }
        Ok(self.custom_story_template.replace("{idea}", idea))
    }

    /// A random opening prompt for `character`.
    pub fn intro_prompt<R: Rng + ?Sized>(&self, character: Character, rng: &mut R) -> String {
        let profile = self.profile(character);
        pick(&self.intro_templates, rng)
            .replace("{name}", profile.name())
            .replace("{traits}", &profile.trait_list())
    }

    /// Follow-up prompt after `character` picked `choice`.
    pub fn continuation_prompt(&self, character: Character, choice: &str) -> String {
        let profile = self.profile(character);
        self.continuation_template
            .replace("{name}", profile.name())
            .replace("{traits}", &profile.trait_list())
            .replace("{choice}", choice)
    }

    /// Pre-written opening for `character`.
    pub fn intro_fallback(&self, character: Character) -> StoryUnit {
        self.intro_fallbacks[key(character)].clone()
    }

    /// Pre-written continuation after `character` picked `choice`.
    ///
    /// Matches on the exact choice text, then falls back to the first entry
    /// for the character. Characters without entries use the astronaut's.
    pub fn continuation_fallback(&self, character: Character, choice: &str) -> StoryUnit {
        let entries = self
            .continuations
            .get(key(character))
            .filter(|entries| !entries.is_empty())
            .unwrap_or_else(|| &self.continuations[key(Character::Astronaut)]);

        entries
            .iter()
            .find(|entry| entry.choice == choice)
            .unwrap_or(&entries[0])
            .to_unit()
    }
}

/// Table key for a character: its lowercase name.
fn key(character: Character) -> &'static str {
    character.into()
}

fn pick<'a, R: Rng + ?Sized>(items: &'a [String], rng: &mut R) -> &'a str {
    // Lists are non-empty after validation.
    items.choose(rng).map_or("", String::as_str)
}
