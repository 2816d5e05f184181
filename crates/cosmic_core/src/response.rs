//! Response decoding for the `generateContent` endpoint.
//!
//! The raw JSON is decoded once into [`GenerateContentResponse`] and then
//! classified into a [`ResponseShape`], so callers never inspect JSON layouts.

use serde::{Deserialize, Serialize};

/// Text part of a candidate's content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidatePart {
    /// Generated text
    #[serde(default)]
    pub text: Option<String>,
}

/// Content block of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Parts of the generated content
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Current response layout
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Legacy layout: text directly on the candidate
    #[serde(default)]
    pub text: Option<String>,
    /// Why generation stopped, e.g. `STOP` or `SAFETY`
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Raw `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// The known response schemas.
///
/// # Examples
///
/// ```
/// use cosmic_core::{GenerateContentResponse, ResponseShape};
///
/// let raw: GenerateContentResponse = serde_json::from_str(
///     r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#,
/// ).unwrap();
///
/// assert_eq!(ResponseShape::from(raw), ResponseShape::Content("Hello".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseShape {
    /// `candidates[0].content.parts[0].text`; a missing text decodes as empty
    Content(String),
    /// `candidates[0].text`
    Legacy(String),
    /// Neither layout matched
    Unrecognized {
        /// Finish reason of the first candidate, when present
        finish_reason: Option<String>,
    },
}

impl ResponseShape {
    /// Extracted text for recognized shapes.
    pub fn text(&self) -> Option<&str> {
        match self {
            ResponseShape::Content(text) | ResponseShape::Legacy(text) => Some(text),
            ResponseShape::Unrecognized { .. } => None,
        }
    }
}

impl From<GenerateContentResponse> for ResponseShape {
    fn from(response: GenerateContentResponse) -> Self {
        let Some(candidate) = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
        else {
            return ResponseShape::Unrecognized {
                finish_reason: None,
            };
        };

        // A content block wins over the legacy field, but only if it has a part
        if let Some(content) = candidate.content {
            if let Some(part) = content.parts.and_then(|parts| parts.into_iter().next()) {
                return ResponseShape::Content(part.text.unwrap_or_default());
            }
            return ResponseShape::Unrecognized {
                finish_reason: candidate.finish_reason,
            };
        }

        match candidate.text {
            Some(text) => ResponseShape::Legacy(text),
            None => ResponseShape::Unrecognized {
                finish_reason: candidate.finish_reason,
            },
        }
    }
}
