//! Story parsing and session error types.

/// Specific error conditions for story generation and play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Generated text was empty or whitespace only
    #[display("Generated text is empty")]
    EmptyResponse,
    /// Response parsed, but yielded no choices
    #[display("No choices found in response")]
    NoChoices,
    /// Roleplay action attempted before picking a character
    #[display("No character selected")]
    NoCharacterSelected,
    /// Character name does not match any profile
    #[display("Unknown character: {}", _0)]
    UnknownCharacter(String),
    /// Choice index outside the current choice list
    #[display("Choice {} is out of range ({} available)", index, available)]
    ChoiceOutOfRange {
        /// Requested zero-based index
        index: usize,
        /// Number of choices on offer
        available: usize,
    },
    /// The latest history entry already has a selected choice
    #[display("A choice was already made on this step (choice {})", _0)]
    ChoiceAlreadyMade(usize),
    /// Interactive input matched no command
    #[display("Unknown command '{}' (expected 1-3, r, w or q)", _0)]
    UnknownCommand(String),
    /// Reading interactive input failed
    #[display("Failed to read input: {}", _0)]
    InputRead(String),
    /// Custom story idea was blank
    #[display("Story idea cannot be empty")]
    EmptyIdea,
    /// Bundled content table failed to load
    #[display("Failed to load content table: {}", _0)]
    ContentTable(String),
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use cosmic_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::NoCharacterSelected);
/// assert!(format!("{}", err).contains("No character"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
