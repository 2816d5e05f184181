//! Test utilities for the Gemini client tests.
//!
//! This module provides a scripted mock generator, a local HTTP server and
//! config helpers.

use cosmic_config::CosmicConfig;

pub mod local_server;
pub mod mock_gemini;

#[allow(unused_imports)]
pub use local_server::{LocalGemini, closed_endpoint};
#[allow(unused_imports)]
pub use mock_gemini::{MockGemini, MockResponse};

/// Bundled configuration with `count` fake endpoints.
pub fn config_with_endpoints(count: usize) -> CosmicConfig {
    let mut config = CosmicConfig::bundled().expect("bundled config is valid");
    config.endpoints = (1..=count)
        .map(|i| format!("https://example.test/v1/model-{}:generateContent", i))
        .collect();
    config
}
