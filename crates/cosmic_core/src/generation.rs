//! Generation parameters and content-safety thresholds sent with every request.

use serde::{Deserialize, Serialize};

/// Sampling parameters for text generation.
///
/// Serializes with the camelCase field names the Gemini API expects and
/// accepts snake_case names when read from configuration files.
///
/// # Examples
///
/// ```
/// use cosmic_core::GenerationConfig;
///
/// let config = GenerationConfig::default();
/// assert_eq!(config.top_k, 40);
/// assert_eq!(config.max_output_tokens, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    #[serde(alias = "top_k")]
    pub top_k: u32,
    /// Nucleus sampling cutoff
    #[serde(alias = "top_p")]
    pub top_p: f32,
    /// Maximum output length in tokens
    #[serde(alias = "max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.8,
            max_output_tokens: 1000,
        }
    }
}

/// Harm categories that can carry a blocking threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum HarmCategory {
    /// Harassment
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    #[display("HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    #[display("HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    #[display("HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    #[display("HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Probability level at which content is blocked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Never block
    #[display("BLOCK_NONE")]
    BlockNone,
    /// Block only high-probability harm
    #[display("BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
    /// Block medium and high
    #[display("BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    /// Block low, medium and high
    #[display("BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
}

/// A category/threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Category the threshold applies to
    pub category: HarmCategory,
    /// Blocking threshold
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// The four categories, each blocked at medium and above.
    ///
    /// ```
    /// use cosmic_core::{HarmBlockThreshold, SafetySetting};
    ///
    /// let settings = SafetySetting::defaults();
    /// assert_eq!(settings.len(), 4);
    /// assert!(settings.iter().all(|s| s.threshold == HarmBlockThreshold::BlockMediumAndAbove));
    /// ```
    pub fn defaults() -> Vec<SafetySetting> {
        [
            HarmCategory::Harassment,
            HarmCategory::HateSpeech,
            HarmCategory::SexuallyExplicit,
            HarmCategory::DangerousContent,
        ]
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        })
        .collect()
    }
}
