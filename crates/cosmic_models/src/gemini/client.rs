//! Gemini `generateContent` over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use cosmic_config::CosmicConfig;
use cosmic_core::{GenerateContentRequest, GenerateContentResponse, ResponseShape};
use cosmic_error::{CosmicResult, GeminiError, GeminiErrorKind};
use cosmic_interface::ContentGenerator;

/// Single-endpoint Gemini REST client.
///
/// Authenticates with the API key as the `key` query parameter. The key is
/// never logged and is stripped from transport error messages.
#[derive(Clone)]
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
}

impl std::fmt::Debug for GeminiHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiHttpClient").finish_non_exhaustive()
    }
}

impl GeminiHttpClient {
    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client cannot be built.
    #[instrument(name = "gemini_http_client_new", skip_all)]
    pub fn new(api_key: impl Into<String>) -> CosmicResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let client = Client::builder()
            .user_agent(concat!("cosmic-tales/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, api_key })
    }

    /// Create a client using the API key from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when no key is configured.
    pub fn from_config(config: &CosmicConfig) -> CosmicResult<Self> {
        Self::new(config.require_api_key()?)
    }
}

#[async_trait]
impl ContentGenerator for GeminiHttpClient {
    #[instrument(skip(self, request), fields(endpoint = %endpoint))]
    async fn generate_content(
        &self,
        endpoint: &str,
        request: &GenerateContentRequest,
    ) -> CosmicResult<ResponseShape> {
        debug!("Sending generateContent request");

        let response = self
            .client
            .post(endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::Transport(e.without_url().to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Endpoint returned error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let raw: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Decode(e.without_url().to_string())))?;

        let shape = ResponseShape::from(raw);
        debug!(recognized = shape.text().is_some(), "Decoded response");
        Ok(shape)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
