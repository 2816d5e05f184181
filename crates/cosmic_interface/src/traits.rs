//! Trait definitions for the API backend and the presentation layer.

use async_trait::async_trait;
use cosmic_core::{GenerateContentRequest, ResponseShape, StoryUnit};
use cosmic_error::CosmicResult;

/// Issues one `generateContent` request against one endpoint.
///
/// Implementations perform exactly one network call per invocation and
/// never retry; endpoint and prompt fallback is layered on top.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// POST `request` to `endpoint` and decode the response shape.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and undecodable bodies.
    /// An unrecognized but well-formed body is `Ok(ResponseShape::Unrecognized)`.
    async fn generate_content(
        &self,
        endpoint: &str,
        request: &GenerateContentRequest,
    ) -> CosmicResult<ResponseShape>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Presentation collaborator driven by the story orchestrators.
pub trait StoryView {
    /// Show or hide the loading indicator.
    fn show_loading(&mut self, loading: bool);

    /// Render a story unit: paragraphs first, then numbered choices.
    fn display_story(&mut self, unit: &StoryUnit);

    /// Render an error message with a hint to try again.
    fn display_error(&mut self, message: &str);
}
