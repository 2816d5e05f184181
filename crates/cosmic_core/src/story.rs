//! Story units: one narrative segment and its follow-up choices.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Maximum number of choices a story unit carries.
pub const MAX_CHOICES: usize = 3;

/// One generated narrative segment plus its follow-up choices.
///
/// A unit is immutable once created. It holds at most [`MAX_CHOICES`]
/// choices; fewer are allowed and are never padded.
///
/// # Examples
///
/// ```
/// use cosmic_core::StoryUnit;
///
/// let unit = StoryUnit::new(
///     "A ship drifts.",
///     vec!["Wait".to_string(), "Flee".to_string(), "Fight".to_string(), "Hide".to_string()],
/// );
///
/// assert_eq!(unit.story(), "A ship drifts.");
/// assert_eq!(unit.choices().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(from = "StoryUnitData")]
pub struct StoryUnit {
    /// Narrative text, may contain embedded newlines
    story: String,
    /// Follow-up choices, at most three
    choices: Vec<String>,
}

impl StoryUnit {
    /// Create a unit, keeping only the first [`MAX_CHOICES`] choices.
    pub fn new(story: impl Into<String>, mut choices: Vec<String>) -> Self {
        choices.truncate(MAX_CHOICES);
        Self {
            story: story.into(),
            choices,
        }
    }

    /// Create a unit with no choices (single-shot stories).
    pub fn narrative(story: impl Into<String>) -> Self {
        Self::new(story, Vec::new())
    }

    /// Get a choice by zero-based index.
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// Whether the unit offers any follow-up choices.
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Iterate over the non-blank paragraphs of the story.
    ///
    /// Each embedded newline is a paragraph break.
    ///
    /// ```
    /// use cosmic_core::StoryUnit;
    ///
    /// let unit = StoryUnit::narrative("First.\n\nSecond.");
    /// assert_eq!(unit.paragraphs().collect::<Vec<_>>(), vec!["First.", "Second."]);
    /// ```
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.story
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

#[derive(Deserialize)]
struct StoryUnitData {
    story: String,
    #[serde(default)]
    choices: Vec<String>,
}

impl From<StoryUnitData> for StoryUnit {
    fn from(data: StoryUnitData) -> Self {
        Self::new(data.story, data.choices)
    }
}
