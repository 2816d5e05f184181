//! Error types for Cosmic Tales.
//!
//! This crate provides the foundation error types used throughout the workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cosmic_error::{CosmicResult, StoryError, StoryErrorKind};
//!
//! fn fetch_story() -> CosmicResult<String> {
//!     Err(StoryError::new(StoryErrorKind::EmptyResponse))?
//! }
//!
//! match fetch_story() {
//!     Ok(story) => println!("Got: {}", story),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod output;
mod story;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{CosmicError, CosmicErrorKind, CosmicResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use output::OutputError;
pub use story::{StoryError, StoryErrorKind};
