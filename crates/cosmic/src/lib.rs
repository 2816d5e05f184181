//! Cosmic Tales - space adventure stories generated with Gemini.
//!
//! Cosmic Tales asks the Gemini `generateContent` API for short space
//! adventures and falls back to pre-written narratives whenever the API is
//! unavailable or answers in an unexpected shape.
//!
//! # Features
//!
//! - **Endpoint fallback**: tries each configured model endpoint with the
//!   caller's prompt, then again with a simplified prompt
//! - **Single-shot stories**: random scenarios or a user-supplied idea
//! - **Roleplay**: pick a character and steer the story through numbered
//!   choices
//! - **Layered configuration**: bundled defaults, user TOML files and the
//!   `GEMINI_API_KEY` environment variable
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cosmic::{ContentTable, CosmicConfig, GeminiHttpClient, StorySession, StoryTeller, TerminalView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CosmicConfig::load()?;
//!     let client = GeminiHttpClient::from_config(&config)?;
//!     let teller = StoryTeller::new(client, &config, Arc::new(ContentTable::bundled()?));
//!
//!     let mut session = StorySession::new();
//!     let mut view = TerminalView::stdout();
//!     teller.regenerate(&mut session, &mut view).await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `cosmic_error` - Error types
//! - `cosmic_core` - Story, history, character and request/response types
//! - `cosmic_config` - Layered configuration
//! - `cosmic_interface` - `ContentGenerator` and `StoryView` traits
//! - `cosmic_models` - Gemini HTTP client and endpoint fallback
//! - `cosmic_narrative` - Parser, content table and orchestrators
//!
//! This crate re-exports everything for convenience and adds the terminal
//! front end.

mod action;
mod view;

pub use action::{RoleplayAction, parse_character};
pub use view::TerminalView;

pub use cosmic_config::*;
pub use cosmic_core::*;
pub use cosmic_error::*;
pub use cosmic_interface::*;
pub use cosmic_models::*;
pub use cosmic_narrative::*;
