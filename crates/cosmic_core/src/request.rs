//! Request body for the `generateContent` endpoint.

use crate::{GenerationConfig, SafetySetting};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Prompt text
    pub text: String,
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Parts of the content block
    pub parts: Vec<Part>,
}

/// Immutable per-call generation request.
///
/// Serializes to `{contents:[{parts:[{text}]}], generationConfig, safetySettings}`.
///
/// # Examples
///
/// ```
/// use cosmic_core::{GenerateContentRequest, GenerationConfig, SafetySetting};
///
/// let request = GenerateContentRequest::for_prompt(
///     "Tell me about Jupiter",
///     GenerationConfig::default(),
///     SafetySetting::defaults(),
/// );
///
/// assert_eq!(request.prompt(), Some("Tell me about Jupiter"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Content blocks; a single block with a single text part for prompts
    pub contents: Vec<Content>,
    /// Sampling parameters
    #[builder(default)]
    pub generation_config: GenerationConfig,
    /// Safety thresholds
    #[builder(default = "SafetySetting::defaults()")]
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    /// Create a builder.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }

    /// Build a single-prompt request.
    pub fn for_prompt(
        prompt: impl Into<String>,
        generation_config: GenerationConfig,
        safety_settings: Vec<SafetySetting>,
    ) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config,
            safety_settings,
        }
    }

    /// Text of the first part, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}
