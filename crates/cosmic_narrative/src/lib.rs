//! Story generation and branching roleplay for Cosmic Tales.
//!
//! Two orchestrators drive the [`ContentGenerator`](cosmic_interface::ContentGenerator)
//! through endpoint fallback and render results through a
//! [`StoryView`](cosmic_interface::StoryView):
//!
//! - [`StoryTeller`] produces one self-contained story per request
//! - [`Roleplay`] runs a character-driven adventure where each turn offers
//!   up to three choices
//!
//! Generation never fails from the caller's point of view. Network, format
//! and parse failures are logged and replaced with a pre-written narrative
//! from the bundled [`ContentTable`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod parser;
mod roleplay;
mod session;
mod teller;

pub use content::{ContentTable, Continuation};
pub use parser::{parse_narrative, parse_story_response};
pub use roleplay::Roleplay;
pub use session::{GenerationFlag, InFlight, StorySession};
pub use teller::StoryTeller;
