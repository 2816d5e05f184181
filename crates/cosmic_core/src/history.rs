//! Append-only record of the story units shown during a session.

use crate::StoryUnit;
use cosmic_error::{CosmicResult, StoryError, StoryErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A story unit together with the choice the player made from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// The unit that was displayed
    unit: StoryUnit,
    /// Zero-based index of the selected choice, once made
    selected_choice: Option<usize>,
}

impl HistoryEntry {
    /// Text of the selected choice, if one was made.
    pub fn selected_choice_text(&self) -> Option<&str> {
        self.selected_choice.and_then(|index| self.unit.choice(index))
    }
}

/// Ordered, append-only story history.
///
/// Entries are never edited after being pushed, except that the most recent
/// entry may have its selected choice recorded once. A second selection on
/// the same entry is rejected.
///
/// # Examples
///
/// ```
/// use cosmic_core::{StoryHistory, StoryUnit};
///
/// let mut history = StoryHistory::default();
/// history.push(StoryUnit::new("Alarms blare.", vec!["Run".into(), "Hide".into()]));
///
/// let chosen = history.select_on_latest(1).unwrap();
/// assert_eq!(chosen, "Hide");
/// assert_eq!(history.latest().unwrap().selected_choice_text(), Some("Hide"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryHistory {
    entries: Vec<HistoryEntry>,
}

impl StoryHistory {
    /// Append a newly displayed unit.
    pub fn push(&mut self, unit: StoryUnit) {
        self.entries.push(HistoryEntry {
            unit,
            selected_choice: None,
        });
    }

    /// Record the selected choice on the most recent entry.
    ///
    /// Returns the text of the selected choice.
    ///
    /// # Errors
    ///
    /// Fails when the history is empty, the index is outside the latest
    /// entry's choices, or the latest entry already has a selection
    /// ([`StoryErrorKind::ChoiceAlreadyMade`]).
    pub fn select_on_latest(&mut self, index: usize) -> CosmicResult<String> {
        let entry = self
            .entries
            .last_mut()
            .ok_or_else(|| StoryError::new(StoryErrorKind::ChoiceOutOfRange { index, available: 0 }))?;

        if let Some(previous) = entry.selected_choice {
            return Err(StoryError::new(StoryErrorKind::ChoiceAlreadyMade(previous)).into());
        }

        let text = entry
            .unit
            .choice(index)
            .ok_or_else(|| {
                StoryError::new(StoryErrorKind::ChoiceOutOfRange {
                    index,
                    available: entry.unit.choices().len(),
                })
            })?
            .to_string();

        entry.selected_choice = Some(index);
        Ok(text)
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Used by explicit session resets only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
