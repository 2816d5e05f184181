//! Roleplay characters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The four playable roleplay characters.
///
/// # Examples
///
/// ```
/// use cosmic_core::Character;
/// use std::str::FromStr;
///
/// assert_eq!(Character::from_str("Pilot").unwrap(), Character::Pilot);
/// assert_eq!(Character::Engineer.to_string(), "engineer");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Character {
    /// A brave astronaut
    Astronaut,
    /// A brilliant researcher
    Scientist,
    /// A skilled starship pilot
    Pilot,
    /// A resourceful engineer
    Engineer,
}

/// Static description of a playable character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CharacterProfile {
    /// Display name, e.g. "Space Explorer"
    name: String,
    /// Emoji shown next to the name
    icon: String,
    /// One-line description
    description: String,
    /// Personality traits woven into prompts
    traits: Vec<String>,
}

impl CharacterProfile {
    /// Create a profile.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
        traits: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            traits,
        }
    }

    /// Traits joined for prompt embedding: `"courageous, explorer"`.
    pub fn trait_list(&self) -> String {
        self.traits.join(", ")
    }
}
