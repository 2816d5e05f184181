//! Gemini API integration for Cosmic Tales.
//!
//! Two layers:
//! - [`GeminiHttpClient`] issues one `generateContent` POST against one endpoint.
//! - [`EndpointFallbackClient`] walks prompt variants and endpoints in order
//!   until some pair yields recognizable text.
//!
//! # Example
//!
//! ```no_run
//! use cosmic_config::CosmicConfig;
//! use cosmic_models::{EndpointFallbackClient, GeminiHttpClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmicConfig::load()?;
//! let client = EndpointFallbackClient::new(GeminiHttpClient::from_config(&config)?, &config);
//!
//! let text = client
//!     .call_api("Write a tale about a space whale", &config.fallback_prompts.story)
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod gemini;

pub use fallback::EndpointFallbackClient;
pub use gemini::GeminiHttpClient;
