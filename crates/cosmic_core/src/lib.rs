//! Core data types for Cosmic Tales.
//!
//! This crate provides the story, history, character and generation-parameter
//! types shared by the client, narrative and CLI crates, plus the
//! `generateContent` request and response bodies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod generation;
mod history;
mod request;
mod response;
mod story;

pub use character::{Character, CharacterProfile};
pub use generation::{GenerationConfig, HarmBlockThreshold, HarmCategory, SafetySetting};
pub use history::{HistoryEntry, StoryHistory};
pub use request::{Content, GenerateContentRequest, GenerateContentRequestBuilder, Part};
pub use response::{
    Candidate, CandidateContent, CandidatePart, GenerateContentResponse, ResponseShape,
};
pub use story::{MAX_CHOICES, StoryUnit};
