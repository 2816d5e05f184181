//! Mutable state shared by one story or roleplay session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cosmic_core::{Character, StoryHistory, StoryUnit};
use derive_getters::Getters;
use tracing::debug;

/// Marks a generation as in flight.
///
/// Only one generation may run per session. A request arriving while the
/// flag is held is dropped, never queued.
///
/// ```
/// use cosmic_narrative::GenerationFlag;
///
/// let flag = GenerationFlag::default();
/// let guard = flag.try_acquire().unwrap();
/// assert!(flag.try_acquire().is_none());
/// drop(guard);
/// assert!(!flag.is_generating());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationFlag(Arc<AtomicBool>);

impl GenerationFlag {
    /// Set the flag unless it is already set.
    ///
    /// The returned guard clears the flag when dropped.
    pub fn try_acquire(&self) -> Option<InFlight> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(Arc::clone(&self.0)))
    }

    /// Whether a generation is running.
    pub fn is_generating(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Guard for a running generation. Clears the flag on drop.
#[derive(Debug)]
#[must_use = "the generation flag is released as soon as the guard is dropped"]
pub struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State of one player's session.
///
/// Holds the unit on screen, the roleplay history, the chosen character and
/// the in-flight flag.
#[derive(Debug, Clone, Default, Getters)]
pub struct StorySession {
    /// Unit currently displayed
    current: Option<StoryUnit>,
    /// Every roleplay unit shown since the last reset
    history: StoryHistory,
    /// Roleplay character, once chosen
    selected_character: Option<Character>,
    /// Single-flight guard
    flag: GenerationFlag,
}

impl StorySession {
    /// Empty session with no character selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a generation is running.
    pub fn is_generating(&self) -> bool {
        self.flag.is_generating()
    }

    /// Choose the roleplay character.
    pub fn select_character(&mut self, character: Character) {
        debug!(%character, "Character selected");
        self.selected_character = Some(character);
    }

    /// Clear the story and history, keeping the character.
    pub fn reset(&mut self) {
        self.current = None;
        self.history.clear();
    }

    /// Clear everything including the character.
    pub fn reset_all(&mut self) {
        self.reset();
        self.selected_character = None;
    }

    pub(crate) fn set_current(&mut self, unit: StoryUnit) {
        self.current = Some(unit);
    }

    pub(crate) fn history_mut(&mut self) -> &mut StoryHistory {
        &mut self.history
    }
}
