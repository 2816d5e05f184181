//! Keyboard commands for the interactive roleplay loop.

use std::str::FromStr;

use cosmic_core::{Character, MAX_CHOICES};
use cosmic_error::{CosmicError, CosmicResult, StoryError, StoryErrorKind};

/// One line of roleplay input.
///
/// ```
/// use cosmic::RoleplayAction;
///
/// assert_eq!("2".parse::<RoleplayAction>().unwrap(), RoleplayAction::Choose(1));
/// assert_eq!(" Q ".parse::<RoleplayAction>().unwrap(), RoleplayAction::Quit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleplayAction {
    /// Pick a choice by zero-based index
    Choose(usize),
    /// New adventure, same character
    Restart,
    /// Back to character selection
    Welcome,
    /// Leave the game
    Quit,
}

impl FromStr for RoleplayAction {
    type Err = CosmicError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "restart" => Ok(Self::Restart),
            "w" | "welcome" => Ok(Self::Welcome),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => match other.parse::<usize>() {
                Ok(number) if (1..=MAX_CHOICES).contains(&number) => Ok(Self::Choose(number - 1)),
                Ok(number) => Err(StoryError::new(StoryErrorKind::ChoiceOutOfRange {
                    index: number.saturating_sub(1),
                    available: MAX_CHOICES,
                })
                .into()),
                Err(_) => {
                    Err(StoryError::new(StoryErrorKind::UnknownCommand(other.to_string())).into())
                }
            },
        }
    }
}

/// Parse a character by name, case-insensitively.
///
/// ```
/// use cosmic::{Character, parse_character};
///
/// assert_eq!(parse_character(" Pilot ").unwrap(), Character::Pilot);
/// assert!(parse_character("captain").is_err());
/// ```
pub fn parse_character(name: &str) -> CosmicResult<Character> {
    let name = name.trim();
    Character::from_str(name)
        .map_err(|_| StoryError::new(StoryErrorKind::UnknownCharacter(name.to_string())).into())
}
