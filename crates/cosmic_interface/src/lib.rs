//! Trait definitions for Cosmic Tales.
//!
//! This crate provides the two seams the story orchestrators are written
//! against: the content generator that talks to the API, and the view that
//! presents results.

mod traits;

pub use traits::{ContentGenerator, StoryView};
