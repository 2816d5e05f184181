//! Extraction of story text and choices from model responses.
//!
//! Roleplay prompts ask for `STORY: ... CHOICES: 1. ... 2. ... 3. ...`, but
//! models do not always comply. Responses missing either marker fall back to
//! a positional reading where the last three lines are the choices.

use std::sync::LazyLock;

use cosmic_core::{MAX_CHOICES, StoryUnit};
use cosmic_error::{CosmicResult, StoryError, StoryErrorKind};
use regex::Regex;
use tracing::{debug, instrument, warn};

/// Story section: after the first `STORY:` up to `CHOICES:` or end of input.
static STORY_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)STORY:\s*(.*?)(?:CHOICES:|\z)").expect("Valid story section regex")
});

/// Choices section: everything after the first `CHOICES:`.
static CHOICES_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)CHOICES:\s*(.*)").expect("Valid choices section regex"));

/// Choice enumerator: `1.`, `2. `, `10.` ...
static ENUMERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*").expect("Valid enumerator regex"));

/// Parse a roleplay response into a story and its choices.
///
/// When both `STORY:` and `CHOICES:` are present the story is the text
/// between them and the choices are split on their `N.` enumerators, keeping
/// at most three. Otherwise the last three non-blank lines are taken
/// verbatim as choices and the preceding lines form the story.
///
/// Fewer than three choices are returned as-is, and so are none: blank
/// input yields an empty story without choices. Whether a unit without
/// choices is usable is up to the caller.
///
/// # Examples
///
/// ```
/// use cosmic_narrative::parse_story_response;
///
/// let unit = parse_story_response("STORY: A ship drifts.\nCHOICES: 1. Wait 2. Flee 3. Fight");
/// assert_eq!(unit.story(), "A ship drifts.");
/// assert_eq!(unit.choices(), &["Wait", "Flee", "Fight"]);
///
/// assert!(!parse_story_response("   ").has_choices());
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_story_response(raw: &str) -> StoryUnit {
    if raw.trim().is_empty() {
        debug!("Blank response");
        return StoryUnit::narrative("");
    }

    let unit = match (STORY_SECTION.captures(raw), CHOICES_SECTION.captures(raw)) {
        (Some(story), Some(choices)) => {
            let story = story.get(1).map_or("", |m| m.as_str()).trim();
            let choices = split_choices(choices.get(1).map_or("", |m| m.as_str()));
            debug!(choices = choices.len(), "Parsed structured response");
            StoryUnit::new(story, choices)
        }
        _ => {
            debug!("Markers missing, using positional parse");
            positional(raw)
        }
    };

    if !unit.has_choices() {
        warn!("Response contained no choices");
    }

    unit
}

/// Parse a single-shot story, which carries no choices.
///
/// Structured responses are unwrapped through [`parse_story_response`];
/// anything else is the whole trimmed text.
///
/// # Errors
///
/// [`StoryErrorKind::EmptyResponse`] for blank input.
///
/// ```
/// use cosmic_narrative::parse_narrative;
///
/// let unit = parse_narrative("  Once, among the stars...\n\nThe end.  ").unwrap();
/// assert_eq!(unit.story(), "Once, among the stars...\n\nThe end.");
/// assert!(!unit.has_choices());
/// ```
pub fn parse_narrative(raw: &str) -> CosmicResult<StoryUnit> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StoryError::new(StoryErrorKind::EmptyResponse).into());
    }

    if trimmed.contains("STORY:") && trimmed.contains("CHOICES:") {
        return Ok(parse_story_response(trimmed));
    }

    Ok(StoryUnit::narrative(trimmed))
}

fn split_choices(section: &str) -> Vec<String> {
    ENUMERATOR
        .split(section.trim())
        .map(str::trim)
        .filter(|choice| !choice.is_empty())
        .take(MAX_CHOICES)
        .map(str::to_string)
        .collect()
}

fn positional(raw: &str) -> StoryUnit {
    let lines: Vec<&str> = raw.split('\n').filter(|line| !line.trim().is_empty()).collect();
    let split = lines.len().saturating_sub(MAX_CHOICES);
    let (story, choices) = lines.split_at(split);
    StoryUnit::new(
        story.join("\n"),
        choices.iter().map(|line| line.to_string()).collect(),
    )
}
