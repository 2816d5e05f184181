//! Ordered endpoint and prompt fallback.

use tracing::{debug, info, instrument, warn};

use cosmic_config::CosmicConfig;
use cosmic_core::{GenerateContentRequest, GenerationConfig, ResponseShape, SafetySetting};
use cosmic_error::{CosmicResult, GeminiError, GeminiErrorKind};
use cosmic_interface::ContentGenerator;

/// Walks prompt variants and endpoints until one pair yields text.
///
/// The outer loop runs over the prompt variants (the caller's prompt, then a
/// simplified one); the inner loop runs over the configured endpoints in
/// order. Any failure or unrecognized response moves on to the next pair, so
/// the worst case issues `endpoints.len() * 2` requests.
#[derive(Debug, Clone)]
pub struct EndpointFallbackClient<G> {
    generator: G,
    endpoints: Vec<String>,
    generation: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

impl<G: ContentGenerator> EndpointFallbackClient<G> {
    /// Wrap a generator with the endpoints and parameters from `config`.
    pub fn new(generator: G, config: &CosmicConfig) -> Self {
        Self {
            generator,
            endpoints: config.endpoints.clone(),
            generation: config.generation,
            safety_settings: config.safety_settings.clone(),
        }
    }

    /// The wrapped single-endpoint generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Configured endpoints, in the order they are tried.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Generate text for `prompt`, retrying with `simplified_prompt`.
    ///
    /// Returns the first recognized text. The text may be empty; callers
    /// decide whether empty counts as failure.
    ///
    /// # Errors
    ///
    /// [`GeminiErrorKind::NoEndpoints`] when nothing is configured, or
    /// [`GeminiErrorKind::AllEndpointsFailed`] once every pair has failed.
    #[instrument(skip_all, fields(provider = self.generator.provider_name(), endpoints = self.endpoints.len()))]
    pub async fn call_api(&self, prompt: &str, simplified_prompt: &str) -> CosmicResult<String> {
        if self.endpoints.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::NoEndpoints).into());
        }

        let variants = [prompt, simplified_prompt];
        let mut attempts = 0;
        let mut last_error = String::from("no request issued");

        for (variant_index, variant) in variants.iter().enumerate() {
            debug!(
                variant = variant_index + 1,
                prompt = %preview(variant),
                "Trying prompt variant"
            );

            let request = GenerateContentRequest::for_prompt(
                *variant,
                self.generation,
                self.safety_settings.clone(),
            );

            for (endpoint_index, endpoint) in self.endpoints.iter().enumerate() {
                attempts += 1;
                debug!(endpoint = endpoint_index + 1, url = %endpoint, "Trying endpoint");

                match self.generator.generate_content(endpoint, &request).await {
                    Ok(ResponseShape::Content(text)) => {
                        info!(
                            variant = variant_index + 1,
                            endpoint = endpoint_index + 1,
                            text_len = text.len(),
                            "Generation succeeded"
                        );
                        return Ok(text);
                    }
                    Ok(ResponseShape::Legacy(text)) => {
                        info!(
                            variant = variant_index + 1,
                            endpoint = endpoint_index + 1,
                            text_len = text.len(),
                            "Generation succeeded (legacy format)"
                        );
                        return Ok(text);
                    }
                    Ok(ResponseShape::Unrecognized { finish_reason }) => {
                        warn!(
                            endpoint = endpoint_index + 1,
                            finish_reason = ?finish_reason,
                            "Unexpected response format"
                        );
                        last_error = GeminiErrorKind::UnrecognizedResponse(format!(
                            "finish reason {}",
                            finish_reason.as_deref().unwrap_or("unknown")
                        ))
                        .to_string();
                    }
                    Err(e) => {
                        warn!(endpoint = endpoint_index + 1, error = %e, "Endpoint failed");
                        last_error = e.to_string();
                    }
                }
            }
        }

        Err(GeminiError::new(GeminiErrorKind::AllEndpointsFailed {
            attempts,
            last_error,
        })
        .into())
    }
}

/// First 100 characters of a prompt, for logs.
fn preview(prompt: &str) -> String {
    let mut preview: String = prompt.chars().take(100).collect();
    if prompt.chars().count() > 100 {
        preview.push_str("...");
    }
    preview
}
