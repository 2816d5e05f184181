//! Mock content generator for testing.

use async_trait::async_trait;
use cosmic_core::{GenerateContentRequest, ResponseShape};
use cosmic_error::{CosmicError, CosmicResult, GeminiError, GeminiErrorKind};
use cosmic_interface::ContentGenerator;
use std::sync::{Arc, Mutex};

/// A single scripted response.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// `candidates[0].content.parts[0].text`
    Content(String),
    /// `candidates[0].text`
    Legacy(String),
    /// Well-formed body matching no known layout
    Unrecognized,
    /// Non-success HTTP status
    Status(u16),
    /// Connection failure
    Transport,
}

/// Records every call and replays scripted responses in order.
///
/// Once the script is exhausted every further call fails with a 503.
#[derive(Clone, Default)]
pub struct MockGemini {
    script: Arc<Mutex<Vec<MockResponse>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl MockGemini {
    /// Replay `responses` in order.
    pub fn new(responses: Vec<MockResponse>) -> Self {
        let mut script = responses;
        script.reverse();
        Self {
            script: Arc::new(Mutex::new(script)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call.
    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    /// Number of requests issued.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(endpoint, prompt)` for every request, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for MockGemini {
    async fn generate_content(
        &self,
        endpoint: &str,
        request: &GenerateContentRequest,
    ) -> CosmicResult<ResponseShape> {
        self.calls.lock().unwrap().push((
            endpoint.to_string(),
            request.prompt().unwrap_or_default().to_string(),
        ));

        let next = self.script.lock().unwrap().pop().unwrap_or(MockResponse::Status(503));
        match next {
            MockResponse::Content(text) => Ok(ResponseShape::Content(text)),
            MockResponse::Legacy(text) => Ok(ResponseShape::Legacy(text)),
            MockResponse::Unrecognized => Ok(ResponseShape::Unrecognized {
                finish_reason: Some("SAFETY".to_string()),
            }),
            MockResponse::Status(status_code) => Err(CosmicError::from(GeminiError::new(
                GeminiErrorKind::HttpStatus {
                    status_code,
                    message: "scripted failure".to_string(),
                },
            ))),
            MockResponse::Transport => Err(GeminiError::new(GeminiErrorKind::Transport(
                "connection refused".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }
}
