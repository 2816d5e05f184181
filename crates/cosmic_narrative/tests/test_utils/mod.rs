//! Shared helpers for narrative tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cosmic_config::CosmicConfig;
use cosmic_core::{GenerateContentRequest, ResponseShape, StoryUnit};
use cosmic_error::{CosmicResult, GeminiError, GeminiErrorKind};
use cosmic_interface::{ContentGenerator, StoryView};
use cosmic_narrative::ContentTable;
use std::sync::{Arc, Mutex};

/// Generator that replays scripted texts, then fails every call.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    script: Arc<Mutex<Vec<Option<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    /// `Some(text)` answers with text, `None` fails with a 500.
    pub fn new(responses: Vec<Option<&str>>) -> Self {
        let mut script: Vec<Option<String>> =
            responses.into_iter().map(|r| r.map(str::to_string)).collect();
        script.reverse();
        Self {
            script: Arc::new(Mutex::new(script)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Some(text)])
    }

    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_content(
        &self,
        _endpoint: &str,
        request: &GenerateContentRequest,
    ) -> CosmicResult<ResponseShape> {
        self.prompts
            .lock()
            .unwrap()
            .push(request.prompt().unwrap_or_default().to_string());

        match self.script.lock().unwrap().pop().flatten() {
            Some(text) => Ok(ResponseShape::Content(text)),
            None => Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: 500,
                message: "scripted failure".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Records every view call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading(bool),
    Story(StoryUnit),
    Error(String),
}

impl RecordingView {
    pub fn stories(&self) -> Vec<&StoryUnit> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Story(unit) => Some(unit),
                _ => None,
            })
            .collect()
    }
}

impl StoryView for RecordingView {
    fn show_loading(&mut self, loading: bool) {
        self.events.push(ViewEvent::Loading(loading));
    }

    fn display_story(&mut self, unit: &StoryUnit) {
        self.events.push(ViewEvent::Story(unit.clone()));
    }

    fn display_error(&mut self, message: &str) {
        self.events.push(ViewEvent::Error(message.to_string()));
    }
}

/// Bundled config with two endpoints, so full exhaustion costs four calls.
pub fn test_config() -> CosmicConfig {
    let mut config = CosmicConfig::bundled().expect("bundled config");
    config.endpoints = vec![
        "https://example.test/a:generateContent".to_string(),
        "https://example.test/b:generateContent".to_string(),
    ];
    config
}

pub fn content() -> Arc<ContentTable> {
    Arc::new(ContentTable::bundled().expect("bundled content"))
}
