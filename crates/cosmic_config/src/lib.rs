//! Configuration for Cosmic Tales.
//!
//! Holds the API key, the ordered endpoint list, generation parameters,
//! content-safety thresholds and the simplified retry prompts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{API_KEY_ENV, CosmicConfig, FallbackPrompts};
